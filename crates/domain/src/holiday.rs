use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A non-business day. `kind` distinguishes national holidays from the
/// municipal ones appended locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Holiday {
    fn national(date: NaiveDate, name: &str) -> Self {
        Self {
            date,
            name: name.into(),
            kind: "national".into(),
        }
    }

    fn local(date: NaiveDate, name: &str) -> Self {
        Self {
            date,
            name: name.into(),
            kind: "local".into(),
        }
    }
}

/// Fixed national + municipal holiday table for the given year.
/// Movable feasts are pinned to their most recent observed dates; the
/// holidays HTTP endpoint can serve fresher data from BrasilAPI, but
/// the reminder scheduling path intentionally relies on this table
/// only.
pub fn national_holidays(year: i32) -> Vec<Holiday> {
    vec![
        Holiday::national(NaiveDate::from_ymd(year, 1, 1), "Confraternização mundial"),
        Holiday::national(NaiveDate::from_ymd(year, 3, 4), "Carnaval"),
        Holiday::national(NaiveDate::from_ymd(year, 4, 18), "Sexta-feira Santa"),
        Holiday::national(NaiveDate::from_ymd(year, 4, 20), "Páscoa"),
        Holiday::national(NaiveDate::from_ymd(year, 4, 21), "Tiradentes"),
        Holiday::national(NaiveDate::from_ymd(year, 5, 1), "Dia do trabalho"),
        Holiday::national(NaiveDate::from_ymd(year, 6, 19), "Corpus Christi"),
        Holiday::national(NaiveDate::from_ymd(year, 9, 7), "Independência do Brasil"),
        Holiday::national(NaiveDate::from_ymd(year, 10, 12), "Nossa Senhora Aparecida"),
        Holiday::national(NaiveDate::from_ymd(year, 11, 2), "Finados"),
        Holiday::national(NaiveDate::from_ymd(year, 11, 15), "Proclamação da República"),
        Holiday::national(NaiveDate::from_ymd(year, 11, 20), "Dia da consciência negra"),
        Holiday::national(NaiveDate::from_ymd(year, 12, 25), "Natal"),
        Holiday::local(NaiveDate::from_ymd(year, 11, 14), "Aniversário de Cascavel"),
    ]
}

pub fn is_national_holiday(date: NaiveDate) -> bool {
    national_holidays(date.year())
        .iter()
        .any(|holiday| holiday.date == date)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn christmas_is_a_holiday() {
        assert!(is_national_holiday(NaiveDate::from_ymd(2024, 12, 25)));
        assert!(is_national_holiday(NaiveDate::from_ymd(2025, 12, 25)));
    }

    #[test]
    fn local_holiday_is_included() {
        assert!(is_national_holiday(NaiveDate::from_ymd(2024, 11, 14)));
    }

    #[test]
    fn ordinary_days_are_not_holidays() {
        assert!(!is_national_holiday(NaiveDate::from_ymd(2024, 6, 3)));
        assert!(!is_national_holiday(NaiveDate::from_ymd(2024, 8, 13)));
    }
}
