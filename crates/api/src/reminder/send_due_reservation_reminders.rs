use super::events::publish_reservation_reminder;
use crate::error::PortariusError;
use crate::shared::usecase::UseCase;
use portarius_domain::Reminder;
use portarius_infra::PortariusContext;

/// The daily pass: every pending or failed reservation reminder due
/// in the noon window is re-published as a send-event. No batching
/// limit, one pass publishes everything that is due.
#[derive(Debug)]
pub struct SendDueReservationRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueReservationRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueReservationReminders";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let due = ctx
            .repos
            .reminders
            .find_pending_from_reservations_for_today(ctx.sys.now(), ctx.config.timezone)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        for reminder in &due {
            let _ = publish_reservation_reminder(reminder, ctx);
        }

        Ok(due)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chrono_tz::America::Sao_Paulo;
    use portarius_domain::{Event, EventKind, ReminderChannel, ReminderStatus, ID};
    use portarius_infra::{setup_context_inmemory, EventListener, ISys};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StaticTimeSys {
        now: DateTime<Utc>,
    }

    impl ISys for StaticTimeSys {
        fn now(&self) -> DateTime<Utc> {
            self.now
        }
    }

    struct CountingListener {
        invocations: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl EventListener for CountingListener {
        async fn handle(&self, _event: &Event, _ctx: &PortariusContext) {
            self.invocations.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn reservation_reminder(scheduled_at: DateTime<Utc>) -> Reminder {
        Reminder {
            id: Default::default(),
            recipient: "11999999999".into(),
            scheduled_at,
            sent_at: None,
            reservation_id: Some(ID::new()),
            package_id: None,
            channel: ReminderChannel::WhatsApp,
            status: ReminderStatus::Pending,
        }
    }

    #[actix_web::main]
    #[test]
    async fn publishes_every_reminder_in_the_noon_window() {
        let mut ctx = setup_context_inmemory();
        let noon = Sao_Paulo.ymd(2024, 6, 3).and_hms(12, 0, 0).with_timezone(&Utc);
        ctx.sys = Arc::new(StaticTimeSys { now: noon });

        let invocations = Arc::new(AtomicUsize::new(0));
        ctx.bus.subscribe(
            EventKind::SendReservationReminder,
            Arc::new(CountingListener {
                invocations: invocations.clone(),
            }),
        );

        for seconds in &[0, 20, 40] {
            ctx.repos
                .reminders
                .insert(&reservation_reminder(noon + Duration::seconds(*seconds)))
                .await
                .unwrap();
        }
        // Due two minutes past noon, outside the window
        ctx.repos
            .reminders
            .insert(&reservation_reminder(noon + Duration::minutes(2)))
            .await
            .unwrap();

        let mut usecase = SendDueReservationRemindersUseCase {};
        let due = usecase.execute(&ctx).await.unwrap();
        assert_eq!(due.len(), 3);

        // Let the spawned listener tasks finish
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(invocations.load(Ordering::SeqCst), 3);
    }

    #[actix_web::main]
    #[test]
    async fn sent_reminders_are_not_republished() {
        let mut ctx = setup_context_inmemory();
        let noon = Sao_Paulo.ymd(2024, 6, 3).and_hms(12, 0, 0).with_timezone(&Utc);
        ctx.sys = Arc::new(StaticTimeSys { now: noon });

        let mut reminder = reservation_reminder(noon);
        reminder.status = ReminderStatus::Sent;
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = SendDueReservationRemindersUseCase {};
        let due = usecase.execute(&ctx).await.unwrap();
        assert!(due.is_empty());
    }
}
