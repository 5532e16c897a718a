mod inmemory;
mod postgres;

pub use inmemory::InMemoryReservationRepo;
pub use postgres::PostgresReservationRepo;

use chrono::{DateTime, Utc};
use portarius_domain::{Reservation, ReservationStatus, SpaceType, ID};

#[async_trait::async_trait]
pub trait IReservationRepo: Send + Sync {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()>;
    async fn save(&self, reservation: &Reservation) -> anyhow::Result<()>;
    async fn find(&self, reservation_id: &ID) -> Option<Reservation>;
    async fn find_all(&self) -> anyhow::Result<Vec<Reservation>>;
    async fn delete(&self, reservation_id: &ID) -> Option<Reservation>;
    async fn find_by_resident(&self, resident_id: &ID) -> anyhow::Result<Vec<Reservation>>;
    async fn find_by_space(&self, space: SpaceType) -> anyhow::Result<Vec<Reservation>>;
    async fn find_by_status(&self, status: ReservationStatus) -> anyhow::Result<Vec<Reservation>>;
    async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Reservation>>;
    /// Not yet started and not cancelled, soonest first.
    async fn find_upcoming(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Reservation>>;
    /// Whether another active reservation overlaps the given timespan
    /// for the same space. Cancelled and keys-returned reservations do
    /// not block; `exclude` leaves one reservation (the one being
    /// updated) out of the check.
    async fn conflict_exists(
        &self,
        space: SpaceType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: Option<&ID>,
    ) -> anyhow::Result<bool>;
}

pub(crate) fn overlaps(
    reservation: &Reservation,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    (reservation.start_time >= start && reservation.start_time <= end)
        || (reservation.end_time >= start && reservation.end_time <= end)
        || (reservation.start_time <= start && reservation.end_time >= end)
}
