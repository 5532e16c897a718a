use chrono::{DateTime, Datelike, Utc, Weekday};
use chrono_tz::Tz;
use thiserror::Error;

/// Upper bound on how far the business-day search may walk backwards.
/// A holiday check that never returns false would otherwise loop
/// forever.
pub const MAX_SCHEDULE_SHIFT_DAYS: u32 = 366;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleDateError {
    #[error("no business day found within {0} days before the reservation start")]
    NoBusinessDayFound(u32),
}

/// When to deliver the key-pickup reminder for a reservation: the
/// reservation's start date at local noon, shifted back one calendar
/// day at a time while the candidate falls on a Saturday, a Sunday or
/// a holiday. The result is the closest preceding business day, still
/// at local noon.
pub fn reminder_schedule_date<F>(
    start_time: DateTime<Utc>,
    tz: Tz,
    is_holiday: F,
) -> Result<DateTime<Utc>, ScheduleDateError>
where
    F: Fn(chrono::NaiveDate) -> bool,
{
    let mut date = start_time.with_timezone(&tz).date();
    let mut shifted = 0;

    while date.weekday() == Weekday::Sat
        || date.weekday() == Weekday::Sun
        || is_holiday(date.naive_local())
    {
        shifted += 1;
        if shifted > MAX_SCHEDULE_SHIFT_DAYS {
            return Err(ScheduleDateError::NoBusinessDayFound(
                MAX_SCHEDULE_SHIFT_DAYS,
            ));
        }
        date = date.pred();
    }

    Ok(date.and_hms(12, 0, 0).with_timezone(&Utc))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::holiday::is_national_holiday;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::America::Sao_Paulo;

    fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Sao_Paulo
            .ymd(year, month, day)
            .and_hms(12, 0, 0)
            .with_timezone(&Utc)
    }

    #[test]
    fn weekday_non_holiday_keeps_the_start_date() {
        // Monday through Thursday, 2024-06-03..06
        for day in 3..=6 {
            let start = Sao_Paulo.ymd(2024, 6, day).and_hms(19, 30, 0).with_timezone(&Utc);
            let scheduled = reminder_schedule_date(start, Sao_Paulo, |_| false).unwrap();
            assert_eq!(scheduled, local_noon(2024, 6, day));
        }
    }

    #[test]
    fn saturday_start_shifts_to_friday_noon() {
        // Saturday 2024-06-01 -> Friday 2024-05-31
        let start = Sao_Paulo.ymd(2024, 6, 1).and_hms(19, 30, 0).with_timezone(&Utc);
        let scheduled = reminder_schedule_date(start, Sao_Paulo, |_| false).unwrap();
        assert_eq!(scheduled, local_noon(2024, 5, 31));
    }

    #[test]
    fn sunday_start_shifts_to_friday_noon() {
        // Sunday 2024-06-02 -> Friday 2024-05-31
        let start = Sao_Paulo.ymd(2024, 6, 2).and_hms(10, 0, 0).with_timezone(&Utc);
        let scheduled = reminder_schedule_date(start, Sao_Paulo, |_| false).unwrap();
        assert_eq!(scheduled, local_noon(2024, 5, 31));
    }

    #[test]
    fn holiday_runs_are_skipped_entirely() {
        // 2025-12-25 (Thursday, Natal) -> Wednesday 2025-12-24
        let start = Sao_Paulo.ymd(2025, 12, 25).and_hms(18, 0, 0).with_timezone(&Utc);
        let scheduled = reminder_schedule_date(start, Sao_Paulo, is_national_holiday).unwrap();
        assert_eq!(scheduled, local_noon(2025, 12, 24));

        // Monday holiday followed back over the weekend: holiday on
        // Monday 2024-06-10 -> Friday 2024-06-07
        let monday = NaiveDate::from_ymd(2024, 6, 10);
        let start = Sao_Paulo.ymd(2024, 6, 10).and_hms(9, 0, 0).with_timezone(&Utc);
        let scheduled = reminder_schedule_date(start, Sao_Paulo, |d| d == monday).unwrap();
        assert_eq!(scheduled, local_noon(2024, 6, 7));
    }

    #[test]
    fn endless_holidays_are_reported_instead_of_looping() {
        let start = Sao_Paulo.ymd(2024, 6, 1).and_hms(12, 0, 0).with_timezone(&Utc);
        let res = reminder_schedule_date(start, Sao_Paulo, |_| true);
        assert_eq!(
            res.unwrap_err(),
            ScheduleDateError::NoBusinessDayFound(MAX_SCHEDULE_SHIFT_DAYS)
        );
    }
}
