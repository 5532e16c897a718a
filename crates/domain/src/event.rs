use crate::reminder::{ReminderChannel, ReminderStatus};
use crate::shared::entity::ID;
use chrono::{DateTime, Utc};

/// Closed set of domain events flowing through the event bus. Each
/// variant carries only identifiers and the data a listener needs to
/// act without loading the publisher's state.
#[derive(Debug, Clone)]
pub enum Event {
    PackageCreated {
        package_id: ID,
        channel: ReminderChannel,
    },
    ReservationCreated {
        reservation_id: ID,
        start_time: DateTime<Utc>,
        channel: ReminderChannel,
    },
    SendPackageReminder {
        reminder_id: ID,
        package_id: Option<ID>,
        phone: String,
    },
    SendReservationReminder {
        reminder_id: ID,
        reservation_id: Option<ID>,
        phone: String,
    },
    UpdateReminderStatus {
        reminder_id: ID,
        status: ReminderStatus,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PackageCreated,
    ReservationCreated,
    SendPackageReminder,
    SendReservationReminder,
    UpdateReminderStatus,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::PackageCreated { .. } => EventKind::PackageCreated,
            Event::ReservationCreated { .. } => EventKind::ReservationCreated,
            Event::SendPackageReminder { .. } => EventKind::SendPackageReminder,
            Event::SendReservationReminder { .. } => EventKind::SendReservationReminder,
            Event::UpdateReminderStatus { .. } => EventKind::UpdateReminderStatus,
        }
    }
}
