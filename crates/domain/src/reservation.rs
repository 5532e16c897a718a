use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Datelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceType {
    #[serde(rename = "SALAO_1")]
    Salon1,
    #[serde(rename = "SALAO_2")]
    Salon2,
}

impl SpaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salon1 => "SALAO_1",
            Self::Salon2 => "SALAO_2",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Salon1, Self::Salon2]
    }
}

impl FromStr for SpaceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SALAO_1" => Ok(Self::Salon1),
            "SALAO_2" => Ok(Self::Salon2),
            _ => Err(anyhow::Error::msg(format!("Invalid space type: {}", s))),
        }
    }
}

impl Display for SpaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "CONFIRMADA")]
    Confirmed,
    #[serde(rename = "CANCELADA")]
    Cancelled,
    #[serde(rename = "CHAVES_RETIRADAS")]
    KeysTaken,
    #[serde(rename = "CHAVES_DEVOLVIDAS")]
    KeysReturned,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDENTE",
            Self::Confirmed => "CONFIRMADA",
            Self::Cancelled => "CANCELADA",
            Self::KeysTaken => "CHAVES_RETIRADAS",
            Self::KeysReturned => "CHAVES_DEVOLVIDAS",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Pending,
            Self::Confirmed,
            Self::Cancelled,
            Self::KeysTaken,
            Self::KeysReturned,
        ]
    }
}

impl FromStr for ReservationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDENTE" => Ok(Self::Pending),
            "CONFIRMADA" => Ok(Self::Confirmed),
            "CANCELADA" => Ok(Self::Cancelled),
            "CHAVES_RETIRADAS" => Ok(Self::KeysTaken),
            "CHAVES_DEVOLVIDAS" => Ok(Self::KeysReturned),
            _ => Err(anyhow::Error::msg(format!(
                "Invalid reservation status: {}",
                s
            ))),
        }
    }
}

impl Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "PIX")]
    Pix,
    #[serde(rename = "BOLETO")]
    Boleto,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Boleto => "BOLETO",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Pix, Self::Boleto]
    }
}

impl FromStr for PaymentMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PIX" => Ok(Self::Pix),
            "BOLETO" => Ok(Self::Boleto),
            _ => Err(anyhow::Error::msg(format!("Invalid payment method: {}", s))),
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "PAGAMENTO_PENDENTE")]
    Pending,
    #[serde(rename = "PAGO")]
    Paid,
    #[serde(rename = "REEMBOLSADO")]
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PAGAMENTO_PENDENTE",
            Self::Paid => "PAGO",
            Self::Refunded => "REEMBOLSADO",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Pending, Self::Paid, Self::Refunded]
    }
}

impl FromStr for PaymentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAGAMENTO_PENDENTE" => Ok(Self::Pending),
            "PAGO" => Ok(Self::Paid),
            "REEMBOLSADO" => Ok(Self::Refunded),
            _ => Err(anyhow::Error::msg(format!("Invalid payment status: {}", s))),
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const WEEKDAY_PAYMENT_AMOUNT: f64 = 45.00;
pub const HOLIDAY_PAYMENT_AMOUNT: f64 = 70.00;

/// A booking of one of the shared party halls.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ID,
    pub resident_id: ID,
    pub space: SpaceType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub payment_amount: f64,
    pub payment_method: PaymentMethod,
    pub payment_date: Option<DateTime<Utc>>,
    pub description: String,
    pub keys_taken_at: Option<DateTime<Utc>>,
    pub keys_returned_at: Option<DateTime<Utc>>,
    pub cancellation_reason: String,
}

impl Reservation {
    /// Single-character hall identifier used in the key-pickup
    /// WhatsApp template, taken from the last character of the space
    /// code's `_` suffix ("SALAO_1" -> "1").
    pub fn hall_letter(&self) -> String {
        let code = self.space.as_str();
        let parts = code.split('_').collect::<Vec<_>>();
        if parts.len() > 1 {
            let suffix = parts[parts.len() - 1];
            if let Some(c) = suffix.chars().last() {
                return c.to_string();
            }
        }
        "".into()
    }
}

impl Entity for Reservation {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Weekend (Friday through Sunday) and holiday bookings are charged
/// the higher rate.
pub fn reservation_payment_amount<F>(start_time: &DateTime<Utc>, tz: Tz, is_holiday: F) -> f64
where
    F: Fn(chrono::NaiveDate) -> bool,
{
    let local = start_time.with_timezone(&tz);
    let weekday = local.weekday();
    if weekday == Weekday::Fri
        || weekday == Weekday::Sat
        || weekday == Weekday::Sun
        || is_holiday(local.date().naive_local())
    {
        HOLIDAY_PAYMENT_AMOUNT
    } else {
        WEEKDAY_PAYMENT_AMOUNT
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::Sao_Paulo;

    fn reservation_at(space: SpaceType) -> Reservation {
        Reservation {
            id: Default::default(),
            resident_id: Default::default(),
            space,
            start_time: Utc.ymd(2024, 6, 3).and_hms(17, 0, 0),
            end_time: Utc.ymd(2024, 6, 3).and_hms(23, 0, 0),
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_amount: 0.0,
            payment_method: PaymentMethod::Pix,
            payment_date: None,
            description: "".into(),
            keys_taken_at: None,
            keys_returned_at: None,
            cancellation_reason: "".into(),
        }
    }

    #[test]
    fn hall_letter_is_last_char_of_space_suffix() {
        assert_eq!(reservation_at(SpaceType::Salon1).hall_letter(), "1");
        assert_eq!(reservation_at(SpaceType::Salon2).hall_letter(), "2");
    }

    #[test]
    fn weekday_reservations_use_common_rate() {
        // Monday 2024-06-03
        let start = Sao_Paulo.ymd(2024, 6, 3).and_hms(18, 0, 0).with_timezone(&Utc);
        let amount = reservation_payment_amount(&start, Sao_Paulo, |_| false);
        assert_eq!(amount, WEEKDAY_PAYMENT_AMOUNT);
    }

    #[test]
    fn friday_through_sunday_uses_holiday_rate() {
        for day in &[7, 8, 9] {
            // 2024-06-07 is a Friday
            let start = Sao_Paulo
                .ymd(2024, 6, *day)
                .and_hms(18, 0, 0)
                .with_timezone(&Utc);
            let amount = reservation_payment_amount(&start, Sao_Paulo, |_| false);
            assert_eq!(amount, HOLIDAY_PAYMENT_AMOUNT);
        }
    }

    #[test]
    fn holidays_use_holiday_rate() {
        // Wednesday 2024-06-05, marked as holiday by the check
        let start = Sao_Paulo.ymd(2024, 6, 5).and_hms(18, 0, 0).with_timezone(&Utc);
        let amount = reservation_payment_amount(&start, Sao_Paulo, |_| true);
        assert_eq!(amount, HOLIDAY_PAYMENT_AMOUNT);
    }
}
