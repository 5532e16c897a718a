mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use portarius_domain::{Reminder, ReminderChannel, ReminderStatus, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_reservation(&self, reservation_id: &ID) -> Option<Reminder>;
    async fn find_by_package(&self, package_id: &ID) -> Option<Reminder>;
    async fn find_by_status(&self, status: ReminderStatus) -> anyhow::Result<Vec<Reminder>>;
    async fn find_by_channel(&self, channel: ReminderChannel) -> anyhow::Result<Vec<Reminder>>;
    async fn find_by_recipient(&self, recipient: &str) -> anyhow::Result<Vec<Reminder>>;
    /// Pending or failed, regardless of what the reminder is linked to.
    async fn find_by_pending_status(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn find_pending_from_reservations(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn find_pending_from_packages(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Pending or failed reservation-linked reminders scheduled inside
    /// the one-minute window starting at local noon of `now`'s date.
    async fn find_pending_from_reservations_for_today(
        &self,
        now: DateTime<Utc>,
        tz: Tz,
    ) -> anyhow::Result<Vec<Reminder>>;
}

pub(crate) fn todays_noon_window(now: DateTime<Utc>, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let local_date = now.with_timezone(&tz).date();
    let window_start = tz
        .ymd(local_date.year(), local_date.month(), local_date.day())
        .and_hms(12, 0, 0)
        .with_timezone(&Utc);
    let window_end = window_start + Duration::minutes(1);
    (window_start, window_end)
}

pub(crate) fn is_pending(status: ReminderStatus) -> bool {
    status == ReminderStatus::Pending || status == ReminderStatus::Failed
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono_tz::America::Sao_Paulo;

    #[test]
    fn noon_window_is_one_minute_long() {
        let now = Sao_Paulo.ymd(2024, 6, 1).and_hms(15, 42, 7).with_timezone(&Utc);
        let (start, end) = todays_noon_window(now, Sao_Paulo);
        assert_eq!(
            start,
            Sao_Paulo.ymd(2024, 6, 1).and_hms(12, 0, 0).with_timezone(&Utc)
        );
        assert_eq!(end - start, Duration::minutes(1));
    }

    #[test]
    fn noon_window_uses_the_local_date() {
        // 2024-06-02 01:00 UTC is still 2024-06-01 in São Paulo
        let now = Utc.ymd(2024, 6, 2).and_hms(1, 0, 0);
        let (start, _) = todays_noon_window(now, Sao_Paulo);
        assert_eq!(
            start,
            Sao_Paulo.ymd(2024, 6, 1).and_hms(12, 0, 0).with_timezone(&Utc)
        );
    }
}
