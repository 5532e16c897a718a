use super::{is_pending, todays_noon_window, IReminderRepo};
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use portarius_domain::{Reminder, ReminderChannel, ReminderStatus, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_all(&self.reminders))
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn find_by_reservation(&self, reservation_id: &ID) -> Option<Reminder> {
        find_by(&self.reminders, |r| {
            r.reservation_id.as_ref() == Some(reservation_id)
        })
        .into_iter()
        .next()
    }

    async fn find_by_package(&self, package_id: &ID) -> Option<Reminder> {
        find_by(&self.reminders, |r| {
            r.package_id.as_ref() == Some(package_id)
        })
        .into_iter()
        .next()
    }

    async fn find_by_status(&self, status: ReminderStatus) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.status == status))
    }

    async fn find_by_channel(&self, channel: ReminderChannel) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.channel == channel))
    }

    async fn find_by_recipient(&self, recipient: &str) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.recipient == recipient))
    }

    async fn find_by_pending_status(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| is_pending(r.status)))
    }

    async fn find_pending_from_reservations(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| {
            is_pending(r.status) && r.reservation_id.is_some()
        }))
    }

    async fn find_pending_from_packages(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| {
            is_pending(r.status) && r.package_id.is_some()
        }))
    }

    async fn find_pending_from_reservations_for_today(
        &self,
        now: DateTime<Utc>,
        tz: Tz,
    ) -> anyhow::Result<Vec<Reminder>> {
        let (window_start, window_end) = todays_noon_window(now, tz);
        Ok(find_by(&self.reminders, |r| {
            is_pending(r.status)
                && r.reservation_id.is_some()
                && r.scheduled_at >= window_start
                && r.scheduled_at < window_end
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, TimeZone};
    use chrono_tz::America::Sao_Paulo;

    fn reminder(
        status: ReminderStatus,
        reservation_id: Option<ID>,
        scheduled_at: DateTime<Utc>,
    ) -> Reminder {
        Reminder {
            id: Default::default(),
            recipient: "11999999999".into(),
            scheduled_at,
            sent_at: None,
            reservation_id,
            package_id: None,
            channel: ReminderChannel::WhatsApp,
            status,
        }
    }

    #[tokio::test]
    async fn pending_status_query_is_idempotent() {
        let repo = InMemoryReminderRepo::new();
        let noon = Sao_Paulo.ymd(2024, 6, 3).and_hms(12, 0, 0).with_timezone(&Utc);
        repo.insert(&reminder(ReminderStatus::Pending, Some(ID::new()), noon))
            .await
            .unwrap();
        repo.insert(&reminder(ReminderStatus::Failed, Some(ID::new()), noon))
            .await
            .unwrap();
        repo.insert(&reminder(ReminderStatus::Sent, Some(ID::new()), noon))
            .await
            .unwrap();

        let first = repo.find_by_pending_status().await.unwrap();
        let second = repo.find_by_pending_status().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn todays_window_excludes_reminders_outside_the_minute() {
        let repo = InMemoryReminderRepo::new();
        let noon = Sao_Paulo.ymd(2024, 6, 3).and_hms(12, 0, 0).with_timezone(&Utc);

        for _ in 0..3 {
            repo.insert(&reminder(
                ReminderStatus::Pending,
                Some(ID::new()),
                noon + Duration::seconds(30),
            ))
            .await
            .unwrap();
        }
        // Scheduled two minutes past noon, outside the window
        repo.insert(&reminder(
            ReminderStatus::Pending,
            Some(ID::new()),
            noon + Duration::minutes(2),
        ))
        .await
        .unwrap();
        // Package-linked reminders are never part of the daily pass
        repo.insert(&reminder(ReminderStatus::Pending, None, noon))
            .await
            .unwrap();

        let due = repo
            .find_pending_from_reservations_for_today(noon, Sao_Paulo)
            .await
            .unwrap();
        assert_eq!(due.len(), 3);
    }
}
