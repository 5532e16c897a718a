mod event;
mod holiday;
mod inventory;
mod package;
mod reminder;
mod reservation;
mod resident;
mod scheduling;
mod shared;
mod user;

pub use event::{Event, EventKind};
pub use holiday::{is_national_holiday, national_holidays, Holiday};
pub use inventory::{InventoryItem, InventoryType};
pub use package::{Package, PackageStatus};
pub use reminder::{Reminder, ReminderChannel, ReminderStatus};
pub use reservation::{
    reservation_payment_amount, PaymentMethod, PaymentStatus, Reservation, ReservationStatus,
    SpaceType, HOLIDAY_PAYMENT_AMOUNT, WEEKDAY_PAYMENT_AMOUNT,
};
pub use resident::{Resident, ResidentType};
pub use scheduling::{reminder_schedule_date, ScheduleDateError, MAX_SCHEDULE_SHIFT_DAYS};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{User, UserRole};
