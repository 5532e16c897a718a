use super::IReservationRepo;
use chrono::{DateTime, Utc};
use portarius_domain::{Reservation, ReservationStatus, SpaceType, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReservationRepo {
    pool: PgPool,
}

impl PostgresReservationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReservationRaw {
    reservation_uid: Uuid,
    resident_uid: Uuid,
    space: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
    payment_status: String,
    payment_amount: f64,
    payment_method: String,
    payment_date: Option<DateTime<Utc>>,
    description: String,
    keys_taken_at: Option<DateTime<Utc>>,
    keys_returned_at: Option<DateTime<Utc>>,
    cancellation_reason: String,
}

impl TryFrom<ReservationRaw> for Reservation {
    type Error = anyhow::Error;

    fn try_from(raw: ReservationRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.reservation_uid.into(),
            resident_id: raw.resident_uid.into(),
            space: raw.space.parse()?,
            start_time: raw.start_time,
            end_time: raw.end_time,
            status: raw.status.parse()?,
            payment_status: raw.payment_status.parse()?,
            payment_amount: raw.payment_amount,
            payment_method: raw.payment_method.parse()?,
            payment_date: raw.payment_date,
            description: raw.description,
            keys_taken_at: raw.keys_taken_at,
            keys_returned_at: raw.keys_returned_at,
            cancellation_reason: raw.cancellation_reason,
        })
    }
}

#[async_trait::async_trait]
impl IReservationRepo for PostgresReservationRepo {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reservations
            (reservation_uid, resident_uid, space, start_time, end_time, status, payment_status,
             payment_amount, payment_method, payment_date, description, keys_taken_at,
             keys_returned_at, cancellation_reason)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(reservation.id.inner_ref())
        .bind(reservation.resident_id.inner_ref())
        .bind(reservation.space.as_str())
        .bind(reservation.start_time)
        .bind(reservation.end_time)
        .bind(reservation.status.as_str())
        .bind(reservation.payment_status.as_str())
        .bind(reservation.payment_amount)
        .bind(reservation.payment_method.as_str())
        .bind(reservation.payment_date)
        .bind(&reservation.description)
        .bind(reservation.keys_taken_at)
        .bind(reservation.keys_returned_at)
        .bind(&reservation.cancellation_reason)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, reservation: &Reservation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reservations SET
                resident_uid = $2,
                space = $3,
                start_time = $4,
                end_time = $5,
                status = $6,
                payment_status = $7,
                payment_amount = $8,
                payment_method = $9,
                payment_date = $10,
                description = $11,
                keys_taken_at = $12,
                keys_returned_at = $13,
                cancellation_reason = $14
            WHERE reservation_uid = $1
            "#,
        )
        .bind(reservation.id.inner_ref())
        .bind(reservation.resident_id.inner_ref())
        .bind(reservation.space.as_str())
        .bind(reservation.start_time)
        .bind(reservation.end_time)
        .bind(reservation.status.as_str())
        .bind(reservation.payment_status.as_str())
        .bind(reservation.payment_amount)
        .bind(reservation.payment_method.as_str())
        .bind(reservation.payment_date)
        .bind(&reservation.description)
        .bind(reservation.keys_taken_at)
        .bind(reservation.keys_returned_at)
        .bind(&reservation.cancellation_reason)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, reservation_id: &ID) -> Option<Reservation> {
        let res = sqlx::query_as::<_, ReservationRaw>(
            r#"
            SELECT * FROM reservations
            WHERE reservation_uid = $1
            "#,
        )
        .bind(reservation_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Reservation::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to find reservation {}: {:?}", reservation_id, e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRaw>(
            r#"
            SELECT * FROM reservations
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
    }

    async fn delete(&self, reservation_id: &ID) -> Option<Reservation> {
        let res = sqlx::query_as::<_, ReservationRaw>(
            r#"
            DELETE FROM reservations
            WHERE reservation_uid = $1
            RETURNING *
            "#,
        )
        .bind(reservation_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Reservation::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to delete reservation {}: {:?}", reservation_id, e);
                None
            }
        }
    }

    async fn find_by_resident(&self, resident_id: &ID) -> anyhow::Result<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRaw>(
            r#"
            SELECT * FROM reservations
            WHERE resident_uid = $1
            "#,
        )
        .bind(resident_id.inner_ref())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
    }

    async fn find_by_space(&self, space: SpaceType) -> anyhow::Result<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRaw>(
            r#"
            SELECT * FROM reservations
            WHERE space = $1
            "#,
        )
        .bind(space.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
    }

    async fn find_by_status(&self, status: ReservationStatus) -> anyhow::Result<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRaw>(
            r#"
            SELECT * FROM reservations
            WHERE status = $1
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
    }

    async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRaw>(
            r#"
            SELECT * FROM reservations
            WHERE start_time BETWEEN $1 AND $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
    }

    async fn find_upcoming(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRaw>(
            r#"
            SELECT * FROM reservations
            WHERE start_time > $1 AND status != $2
            ORDER BY start_time ASC
            "#,
        )
        .bind(now)
        .bind(ReservationStatus::Cancelled.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
    }

    async fn conflict_exists(
        &self,
        space: SpaceType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: Option<&ID>,
    ) -> anyhow::Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reservations
            WHERE space = $1
              AND status NOT IN ($2, $3)
              AND ((start_time BETWEEN $4 AND $5)
                OR (end_time BETWEEN $4 AND $5)
                OR (start_time <= $4 AND end_time >= $5))
              AND ($6::uuid IS NULL OR reservation_uid != $6::uuid)
            "#,
        )
        .bind(space.as_str())
        .bind(ReservationStatus::Cancelled.as_str())
        .bind(ReservationStatus::KeysReturned.as_str())
        .bind(start)
        .bind(end)
        .bind(exclude.map(|id| *id.inner_ref()))
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}
