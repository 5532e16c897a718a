use crate::dtos::ReservationDTO;
use chrono::{DateTime, Utc};
use portarius_domain::{
    PaymentMethod, PaymentStatus, Reservation, ReservationStatus, SpaceType, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation: ReservationDTO,
}

impl ReservationResponse {
    pub fn new(reservation: Reservation) -> Self {
        Self {
            reservation: ReservationDTO::new(reservation),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub reservations: Vec<ReservationDTO>,
}

impl ReservationsResponse {
    pub fn new(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: reservations.into_iter().map(ReservationDTO::new).collect(),
        }
    }
}

pub mod create_reservation {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub resident_id: ID,
        pub space: SpaceType,
        pub start_time: DateTime<Utc>,
        pub end_time: DateTime<Utc>,
        pub payment_method: PaymentMethod,
        pub description: Option<String>,
    }

    pub type APIResponse = ReservationResponse;
}

pub mod get_reservation {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reservation_id: ID,
    }

    pub type APIResponse = ReservationResponse;
}

pub mod get_reservations {
    use super::*;

    pub type APIResponse = ReservationsResponse;
}

pub mod update_reservation {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reservation_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub space: Option<SpaceType>,
        pub start_time: Option<DateTime<Utc>>,
        pub end_time: Option<DateTime<Utc>>,
        pub payment_method: Option<PaymentMethod>,
        pub description: Option<String>,
    }

    pub type APIResponse = ReservationResponse;
}

pub mod delete_reservation {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reservation_id: ID,
    }

    pub type APIResponse = ReservationResponse;
}

pub mod change_reservation_status {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reservation_id: ID,
    }

    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub cancellation_reason: Option<String>,
    }

    pub type APIResponse = ReservationResponse;
}

pub mod confirm_reservation_payment {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reservation_id: ID,
    }

    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub payment_method: Option<PaymentMethod>,
    }

    pub type APIResponse = ReservationResponse;
}

pub mod get_reservations_by_resident {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub resident_id: ID,
    }

    pub type APIResponse = ReservationsResponse;
}

pub mod get_reservations_by_space {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub space: String,
    }

    pub type APIResponse = ReservationsResponse;
}

pub mod get_reservations_by_status {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub status: String,
    }

    pub type APIResponse = ReservationsResponse;
}

pub mod get_reservations_by_date_range {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub start_date: DateTime<Utc>,
        pub end_date: DateTime<Utc>,
    }

    pub type APIResponse = ReservationsResponse;
}

pub mod get_upcoming_reservations {
    use super::*;

    pub type APIResponse = ReservationsResponse;
}

pub mod get_reservation_enums {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct StatusesResponse {
        pub statuses: Vec<ReservationStatus>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SpacesResponse {
        pub spaces: Vec<SpaceType>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PaymentMethodsResponse {
        pub payment_methods: Vec<PaymentMethod>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PaymentStatusesResponse {
        pub payment_statuses: Vec<PaymentStatus>,
    }
}
