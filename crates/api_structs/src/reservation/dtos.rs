use chrono::{DateTime, Utc};
use portarius_domain::{
    PaymentMethod, PaymentStatus, Reservation, ReservationStatus, SpaceType, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDTO {
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

impl ReservationDTO {
    pub fn new(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            resident_id: reservation.resident_id,
            space: reservation.space,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
            status: reservation.status,
            payment_status: reservation.payment_status,
            payment_amount: reservation.payment_amount,
            payment_method: reservation.payment_method,
            payment_date: reservation.payment_date,
            description: reservation.description,
            keys_taken_at: reservation.keys_taken_at,
            keys_returned_at: reservation.keys_returned_at,
            cancellation_reason: reservation.cancellation_reason,
        }
    }
}
