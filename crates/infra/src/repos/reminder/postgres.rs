use super::{todays_noon_window, IReminderRepo};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use portarius_domain::{Reminder, ReminderChannel, ReminderStatus, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    recipient: String,
    scheduled_at: DateTime<Utc>,
    sent_at: Option<DateTime<Utc>>,
    reservation_uid: Option<Uuid>,
    package_uid: Option<Uuid>,
    channel: String,
    status: String,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.reminder_uid.into(),
            recipient: raw.recipient,
            scheduled_at: raw.scheduled_at,
            sent_at: raw.sent_at,
            reservation_id: raw.reservation_uid.map(|uid| uid.into()),
            package_id: raw.package_uid.map(|uid| uid.into()),
            channel: raw.channel.parse()?,
            status: raw.status.parse()?,
        })
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, recipient, scheduled_at, sent_at, reservation_uid, package_uid, channel, status)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.recipient)
        .bind(reminder.scheduled_at)
        .bind(reminder.sent_at)
        .bind(reminder.reservation_id.as_ref().map(|id| *id.inner_ref()))
        .bind(reminder.package_id.as_ref().map(|id| *id.inner_ref()))
        .bind(reminder.channel.as_str())
        .bind(reminder.status.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders SET
                recipient = $2,
                scheduled_at = $3,
                sent_at = $4,
                reservation_uid = $5,
                package_uid = $6,
                channel = $7,
                status = $8
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.recipient)
        .bind(reminder.scheduled_at)
        .bind(reminder.sent_at)
        .bind(reminder.reservation_id.as_ref().map(|id| *id.inner_ref()))
        .bind(reminder.package_id.as_ref().map(|id| *id.inner_ref()))
        .bind(reminder.channel.as_str())
        .bind(reminder.status.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let res = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Reminder::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to find reminder {}: {:?}", reminder_id, e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        let res = sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Reminder::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to delete reminder {}: {:?}", reminder_id, e);
                None
            }
        }
    }

    async fn find_by_reservation(&self, reservation_id: &ID) -> Option<Reminder> {
        let res = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE reservation_uid = $1
            "#,
        )
        .bind(reservation_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Reminder::try_from(raw).ok()),
            Err(e) => {
                error!(
                    "Unable to find reminder by reservation {}: {:?}",
                    reservation_id, e
                );
                None
            }
        }
    }

    async fn find_by_package(&self, package_id: &ID) -> Option<Reminder> {
        let res = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE package_uid = $1
            "#,
        )
        .bind(package_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Reminder::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to find reminder by package {}: {:?}", package_id, e);
                None
            }
        }
    }

    async fn find_by_status(&self, status: ReminderStatus) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE status = $1
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn find_by_channel(&self, channel: ReminderChannel) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE channel = $1
            "#,
        )
        .bind(channel.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn find_by_recipient(&self, recipient: &str) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE recipient = $1
            "#,
        )
        .bind(recipient)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn find_by_pending_status(&self) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE status IN ($1, $2)
            "#,
        )
        .bind(ReminderStatus::Pending.as_str())
        .bind(ReminderStatus::Failed.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn find_pending_from_reservations(&self) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE status IN ($1, $2) AND reservation_uid IS NOT NULL
            "#,
        )
        .bind(ReminderStatus::Pending.as_str())
        .bind(ReminderStatus::Failed.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn find_pending_from_packages(&self) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE status IN ($1, $2) AND package_uid IS NOT NULL
            "#,
        )
        .bind(ReminderStatus::Pending.as_str())
        .bind(ReminderStatus::Failed.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn find_pending_from_reservations_for_today(
        &self,
        now: DateTime<Utc>,
        tz: Tz,
    ) -> anyhow::Result<Vec<Reminder>> {
        let (window_start, window_end) = todays_noon_window(now, tz);

        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders
            WHERE status IN ($1, $2)
              AND reservation_uid IS NOT NULL
              AND scheduled_at >= $3
              AND scheduled_at < $4
            "#,
        )
        .bind(ReminderStatus::Pending.as_str())
        .bind(ReminderStatus::Failed.as_str())
        .bind(window_start)
        .bind(window_end)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }
}
