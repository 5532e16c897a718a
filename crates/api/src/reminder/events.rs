use portarius_domain::{Event, Reminder, ReminderStatus};
use portarius_infra::PortariusContext;
use tokio::task::JoinHandle;

/// Emits the send-event for a package-linked reminder that still
/// needs dispatching.
pub fn publish_package_reminder(reminder: &Reminder, ctx: &PortariusContext) -> Vec<JoinHandle<()>> {
    if reminder.package_id.is_some() && reminder.status == ReminderStatus::Pending
        || reminder.status == ReminderStatus::Failed
    {
        return ctx.bus.publish(
            Event::SendPackageReminder {
                reminder_id: reminder.id.clone(),
                package_id: reminder.package_id.clone(),
                phone: reminder.recipient.clone(),
            },
            ctx,
        );
    }
    Vec::new()
}

/// Emits the send-event for a reservation-linked reminder that still
/// needs dispatching.
pub fn publish_reservation_reminder(
    reminder: &Reminder,
    ctx: &PortariusContext,
) -> Vec<JoinHandle<()>> {
    if reminder.reservation_id.is_some() && reminder.status == ReminderStatus::Pending
        || reminder.status == ReminderStatus::Failed
    {
        return ctx.bus.publish(
            Event::SendReservationReminder {
                reminder_id: reminder.id.clone(),
                reservation_id: reminder.reservation_id.clone(),
                phone: reminder.recipient.clone(),
            },
            ctx,
        );
    }
    Vec::new()
}

#[cfg(test)]
mod test {
    use super::*;
    use portarius_domain::{EventKind, ReminderChannel, ID};
    use portarius_infra::{setup_context_inmemory, EventListener};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingListener {
        invocations: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl EventListener for CountingListener {
        async fn handle(&self, _event: &Event, _ctx: &PortariusContext) {
            self.invocations.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn reminder(status: ReminderStatus, package_id: Option<ID>) -> Reminder {
        Reminder {
            id: Default::default(),
            recipient: "11999999999".into(),
            scheduled_at: chrono::Utc::now(),
            sent_at: None,
            reservation_id: None,
            package_id,
            channel: ReminderChannel::WhatsApp,
            status,
        }
    }

    async fn published_count(reminder: &Reminder) -> usize {
        let ctx = setup_context_inmemory();
        let invocations = Arc::new(AtomicUsize::new(0));
        ctx.bus.subscribe(
            EventKind::SendPackageReminder,
            Arc::new(CountingListener {
                invocations: invocations.clone(),
            }),
        );

        for handle in publish_package_reminder(reminder, &ctx) {
            handle.await.unwrap();
        }
        invocations.load(Ordering::SeqCst)
    }

    #[actix_web::main]
    #[test]
    async fn pending_package_reminders_are_published() {
        let reminder = reminder(ReminderStatus::Pending, Some(ID::new()));
        assert_eq!(published_count(&reminder).await, 1);
    }

    #[actix_web::main]
    #[test]
    async fn sent_reminders_are_not_published() {
        let reminder = reminder(ReminderStatus::Sent, Some(ID::new()));
        assert_eq!(published_count(&reminder).await, 0);
    }

    #[actix_web::main]
    #[test]
    async fn pending_reminders_without_package_link_are_not_published() {
        let reminder = reminder(ReminderStatus::Pending, None);
        assert_eq!(published_count(&reminder).await, 0);
    }

    #[actix_web::main]
    #[test]
    async fn failed_reminders_are_published_even_without_package_link() {
        // The failed arm of the guard does not require the package
        // link, so an unlinked failed reminder still produces an event
        // (one that no dispatch can act on).
        let reminder = reminder(ReminderStatus::Failed, None);
        assert_eq!(published_count(&reminder).await, 1);
    }
}
