use super::{overlaps, IReservationRepo};
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use portarius_domain::{Reservation, ReservationStatus, SpaceType, ID};

pub struct InMemoryReservationRepo {
    reservations: std::sync::Mutex<Vec<Reservation>>,
}

impl InMemoryReservationRepo {
    pub fn new() -> Self {
        Self {
            reservations: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReservationRepo for InMemoryReservationRepo {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()> {
        insert(reservation, &self.reservations);
        Ok(())
    }

    async fn save(&self, reservation: &Reservation) -> anyhow::Result<()> {
        save(reservation, &self.reservations);
        Ok(())
    }

    async fn find(&self, reservation_id: &ID) -> Option<Reservation> {
        find(reservation_id, &self.reservations)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reservation>> {
        Ok(find_all(&self.reservations))
    }

    async fn delete(&self, reservation_id: &ID) -> Option<Reservation> {
        delete(reservation_id, &self.reservations)
    }

    async fn find_by_resident(&self, resident_id: &ID) -> anyhow::Result<Vec<Reservation>> {
        Ok(find_by(&self.reservations, |r| {
            r.resident_id == *resident_id
        }))
    }

    async fn find_by_space(&self, space: SpaceType) -> anyhow::Result<Vec<Reservation>> {
        Ok(find_by(&self.reservations, |r| r.space == space))
    }

    async fn find_by_status(&self, status: ReservationStatus) -> anyhow::Result<Vec<Reservation>> {
        Ok(find_by(&self.reservations, |r| r.status == status))
    }

    async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Reservation>> {
        Ok(find_by(&self.reservations, |r| {
            r.start_time >= start && r.start_time <= end
        }))
    }

    async fn find_upcoming(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Reservation>> {
        let mut upcoming = find_by(&self.reservations, |r| {
            r.start_time > now && r.status != ReservationStatus::Cancelled
        });
        upcoming.sort_by_key(|r| r.start_time);
        Ok(upcoming)
    }

    async fn conflict_exists(
        &self,
        space: SpaceType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: Option<&ID>,
    ) -> anyhow::Result<bool> {
        let conflicting = find_by(&self.reservations, |r| {
            r.space == space
                && r.status != ReservationStatus::Cancelled
                && r.status != ReservationStatus::KeysReturned
                && overlaps(r, start, end)
                && exclude.map(|id| r.id != *id).unwrap_or(true)
        });
        Ok(!conflicting.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use portarius_domain::{PaymentMethod, PaymentStatus};

    fn reservation(space: SpaceType, start_h: u32, end_h: u32) -> Reservation {
        Reservation {
            id: Default::default(),
            resident_id: Default::default(),
            space,
            start_time: Utc.ymd(2024, 6, 1).and_hms(start_h, 0, 0),
            end_time: Utc.ymd(2024, 6, 1).and_hms(end_h, 0, 0),
            status: ReservationStatus::Confirmed,
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

    #[tokio::test]
    async fn detects_overlapping_reservations() {
        let repo = InMemoryReservationRepo::new();
        let existing = reservation(SpaceType::Salon1, 12, 18);
        repo.insert(&existing).await.unwrap();

        let start = Utc.ymd(2024, 6, 1).and_hms(16, 0, 0);
        let end = Utc.ymd(2024, 6, 1).and_hms(22, 0, 0);

        assert!(repo
            .conflict_exists(SpaceType::Salon1, start, end, None)
            .await
            .unwrap());
        // Other space is free
        assert!(!repo
            .conflict_exists(SpaceType::Salon2, start, end, None)
            .await
            .unwrap());
        // The reservation being edited does not conflict with itself
        assert!(!repo
            .conflict_exists(SpaceType::Salon1, start, end, Some(&existing.id))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn cancelled_reservations_do_not_conflict() {
        let repo = InMemoryReservationRepo::new();
        let mut existing = reservation(SpaceType::Salon1, 12, 18);
        existing.status = ReservationStatus::Cancelled;
        repo.insert(&existing).await.unwrap();

        let start = Utc.ymd(2024, 6, 1).and_hms(13, 0, 0);
        let end = Utc.ymd(2024, 6, 1).and_hms(15, 0, 0);
        assert!(!repo
            .conflict_exists(SpaceType::Salon1, start, end, None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn enveloping_reservation_conflicts() {
        let repo = InMemoryReservationRepo::new();
        repo.insert(&reservation(SpaceType::Salon1, 8, 23))
            .await
            .unwrap();

        let start = Utc.ymd(2024, 6, 1).and_hms(12, 0, 0);
        let end = Utc.ymd(2024, 6, 1).and_hms(14, 0, 0);
        assert!(repo
            .conflict_exists(SpaceType::Salon1, start, end, None)
            .await
            .unwrap());
    }
}
