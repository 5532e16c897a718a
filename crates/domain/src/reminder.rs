use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Delivery medium for a `Reminder`. Only WhatsApp is wired to a
/// dispatcher; reminders on the remaining channels are stored but
/// never sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderChannel {
    #[serde(rename = "WHATSAPP")]
    WhatsApp,
    #[serde(rename = "EMAIL")]
    Email,
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "TELEGRAM")]
    Telegram,
    #[serde(rename = "INSTAGRAM")]
    Instagram,
    #[serde(rename = "FACEBOOK")]
    Facebook,
    #[serde(rename = "DISCORD")]
    Discord,
}

impl ReminderChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WHATSAPP",
            Self::Email => "EMAIL",
            Self::Sms => "SMS",
            Self::Telegram => "TELEGRAM",
            Self::Instagram => "INSTAGRAM",
            Self::Facebook => "FACEBOOK",
            Self::Discord => "DISCORD",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::WhatsApp,
            Self::Email,
            Self::Sms,
            Self::Telegram,
            Self::Instagram,
            Self::Facebook,
            Self::Discord,
        ]
    }
}

impl FromStr for ReminderChannel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WHATSAPP" => Ok(Self::WhatsApp),
            "EMAIL" => Ok(Self::Email),
            "SMS" => Ok(Self::Sms),
            "TELEGRAM" => Ok(Self::Telegram),
            "INSTAGRAM" => Ok(Self::Instagram),
            "FACEBOOK" => Ok(Self::Facebook),
            "DISCORD" => Ok(Self::Discord),
            _ => Err(anyhow::Error::msg(format!("Invalid reminder channel: {}", s))),
        }
    }
}

impl Display for ReminderChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "SENT")]
    Sent,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Sent => "SENT",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Pending, Self::Sent, Self::Failed, Self::Cancelled]
    }
}

impl FromStr for ReminderStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "SENT" => Ok(Self::Sent),
            "FAILED" => Ok(Self::Failed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(anyhow::Error::msg(format!("Invalid reminder status: {}", s))),
        }
    }
}

impl Display for ReminderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled notification tied to either a `Package` or a
/// `Reservation`. At most one of the two foreign keys is set; this is
/// upheld by the listeners that create reminders, not by the storage
/// layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// Contact address the notification goes to (a phone number).
    pub recipient: String,
    pub scheduled_at: DateTime<Utc>,
    /// Set when a dispatch outcome arrives, `None` until then.
    pub sent_at: Option<DateTime<Utc>>,
    pub reservation_id: Option<ID>,
    pub package_id: Option<ID>,
    pub channel: ReminderChannel,
    pub status: ReminderStatus,
}

impl Entity for Reminder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
