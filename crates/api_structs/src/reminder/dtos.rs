use chrono::{DateTime, Utc};
use portarius_domain::{Reminder, ReminderChannel, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub recipient: String,
    pub scheduled_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    pub reservation_id: Option<ID>,
    pub package_id: Option<ID>,
    pub channel: ReminderChannel,
    pub status: ReminderStatus,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            recipient: reminder.recipient,
            scheduled_at: reminder.scheduled_at,
            sent_at: reminder.sent_at,
            reservation_id: reminder.reservation_id,
            package_id: reminder.package_id,
            channel: reminder.channel,
            status: reminder.status,
        }
    }
}
