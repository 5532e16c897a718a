use crate::dtos::ReminderDTO;
use chrono::{DateTime, Utc};
use portarius_domain::{Reminder, ReminderChannel, ReminderStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub recipient: String,
        pub scheduled_at: DateTime<Utc>,
        pub reservation_id: Option<ID>,
        pub package_id: Option<ID>,
        pub channel: Option<ReminderChannel>,
        pub status: Option<ReminderStatus>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod update_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub recipient: Option<String>,
        pub scheduled_at: Option<DateTime<Utc>>,
        pub channel: Option<ReminderChannel>,
        pub status: Option<ReminderStatus>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder_by_reservation {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reservation_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder_by_package {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub package_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders_by_status {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub status: String,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminders_by_channel {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub channel: String,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminders_by_recipient {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub recipient: String,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_pending_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod get_reminder_enums {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ChannelsResponse {
        pub channels: Vec<ReminderChannel>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct StatusesResponse {
        pub statuses: Vec<ReminderStatus>,
    }
}
