mod holiday;
mod inventory;
mod package;
mod reminder;
mod reservation;
mod resident;
mod status;
mod user;

pub mod dtos {
    pub use crate::inventory::dtos::*;
    pub use crate::package::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::reservation::dtos::*;
    pub use crate::resident::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::holiday::api::*;
pub use crate::inventory::api::*;
pub use crate::package::api::*;
pub use crate::reminder::api::*;
pub use crate::reservation::api::*;
pub use crate::resident::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
