use super::events::publish_package_reminder;
use portarius_domain::{
    is_national_holiday, reminder_schedule_date, Event, EventKind, Reminder, ReminderStatus,
};
use portarius_infra::{EventListener, PortariusContext};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Wires the reminder side effects to the event bus. Called once at
/// application startup; each event kind gets exactly one listener.
pub fn register_reminder_listeners(ctx: &PortariusContext) {
    ctx.bus.subscribe(
        EventKind::PackageCreated,
        Arc::new(CreateReminderOnPackageCreated),
    );
    ctx.bus.subscribe(
        EventKind::ReservationCreated,
        Arc::new(CreateReminderOnReservationCreated),
    );
    ctx.bus.subscribe(
        EventKind::SendPackageReminder,
        Arc::new(SendPackageReminderOnEvent),
    );
    ctx.bus.subscribe(
        EventKind::SendReservationReminder,
        Arc::new(SendReservationReminderOnEvent),
    );
    ctx.bus.subscribe(
        EventKind::UpdateReminderStatus,
        Arc::new(UpdateReminderStatusOnEvent),
    );
}

/// Creates a pending reminder for the package addressee, scheduled
/// right away.
pub struct CreateReminderOnPackageCreated;

#[async_trait::async_trait]
impl EventListener for CreateReminderOnPackageCreated {
    async fn handle(&self, event: &Event, ctx: &PortariusContext) {
        let (package_id, channel) = match event {
            Event::PackageCreated {
                package_id,
                channel,
            } => (package_id, channel),
            _ => return,
        };

        let package = match ctx.repos.packages.find(package_id).await {
            Some(package) => package,
            None => {
                debug!("No package {} found, dropping event", package_id);
                return;
            }
        };
        let resident = match ctx.repos.residents.find(&package.resident_id).await {
            Some(resident) => resident,
            None => {
                debug!(
                    "No resident found for package {}, dropping event",
                    package_id
                );
                return;
            }
        };

        let reminder = Reminder {
            id: Default::default(),
            recipient: resident.phone,
            scheduled_at: ctx.sys.now(),
            sent_at: None,
            reservation_id: None,
            package_id: Some(package_id.clone()),
            channel: *channel,
            status: ReminderStatus::Pending,
        };

        if let Err(e) = ctx.repos.reminders.insert(&reminder).await {
            error!("Unable to store reminder for package {}: {:?}", package_id, e);
        }
    }
}

/// Creates a pending reminder for the reservation owner, scheduled on
/// the last business day before the reservation starts.
pub struct CreateReminderOnReservationCreated;

#[async_trait::async_trait]
impl EventListener for CreateReminderOnReservationCreated {
    async fn handle(&self, event: &Event, ctx: &PortariusContext) {
        let (reservation_id, start_time, channel) = match event {
            Event::ReservationCreated {
                reservation_id,
                start_time,
                channel,
            } => (reservation_id, start_time, channel),
            _ => return,
        };

        let reservation = match ctx.repos.reservations.find(reservation_id).await {
            Some(reservation) => reservation,
            None => {
                debug!("No reservation {} found, dropping event", reservation_id);
                return;
            }
        };
        let resident = match ctx.repos.residents.find(&reservation.resident_id).await {
            Some(resident) => resident,
            None => {
                debug!(
                    "No resident found for reservation {}, dropping event",
                    reservation_id
                );
                return;
            }
        };

        let scheduled_at =
            match reminder_schedule_date(*start_time, ctx.config.timezone, is_national_holiday) {
                Ok(scheduled_at) => scheduled_at,
                Err(e) => {
                    warn!(
                        "No schedulable date for reservation {}: {:?}",
                        reservation_id, e
                    );
                    return;
                }
            };

        let reminder = Reminder {
            id: Default::default(),
            recipient: resident.phone,
            scheduled_at,
            sent_at: None,
            reservation_id: Some(reservation_id.clone()),
            package_id: None,
            channel: *channel,
            status: ReminderStatus::Pending,
        };

        if let Err(e) = ctx.repos.reminders.insert(&reminder).await {
            error!(
                "Unable to store reminder for reservation {}: {:?}",
                reservation_id, e
            );
            return;
        }

        // TODO: check whether this should go through
        // publish_reservation_reminder instead; the daily scheduler
        // already emits the reservation send-event at noon.
        let _ = publish_package_reminder(&reminder, ctx);
    }
}

/// Hands a package reminder to the notification dispatcher and reports
/// the outcome back on the bus.
pub struct SendPackageReminderOnEvent;

#[async_trait::async_trait]
impl EventListener for SendPackageReminderOnEvent {
    async fn handle(&self, event: &Event, ctx: &PortariusContext) {
        let (reminder_id, package_id, phone) = match event {
            Event::SendPackageReminder {
                reminder_id,
                package_id,
                phone,
            } => (reminder_id, package_id, phone),
            _ => return,
        };

        let package_id = match package_id {
            Some(package_id) => package_id,
            None => {
                debug!(
                    "Send-event for reminder {} carries no package, dropping",
                    reminder_id
                );
                return;
            }
        };
        let package = match ctx.repos.packages.find(package_id).await {
            Some(package) => package,
            None => {
                debug!("No package {} found, dropping event", package_id);
                return;
            }
        };
        let resident = match ctx.repos.residents.find(&package.resident_id).await {
            Some(resident) => resident,
            None => {
                debug!(
                    "No resident found for package {}, dropping event",
                    package_id
                );
                return;
            }
        };

        let status = match ctx
            .notifier
            .send_package_notification(reminder_id, phone, &resident.name)
            .await
        {
            Ok(()) => ReminderStatus::Sent,
            Err(e) => {
                error!(
                    "Package notification for reminder {} failed: {:?}",
                    reminder_id, e
                );
                ReminderStatus::Failed
            }
        };

        let _ = ctx.bus.publish(
            Event::UpdateReminderStatus {
                reminder_id: reminder_id.clone(),
                status,
            },
            ctx,
        );
    }
}

/// Hands a reservation key reminder to the notification dispatcher and
/// reports the outcome back on the bus.
pub struct SendReservationReminderOnEvent;

#[async_trait::async_trait]
impl EventListener for SendReservationReminderOnEvent {
    async fn handle(&self, event: &Event, ctx: &PortariusContext) {
        let (reminder_id, reservation_id, phone) = match event {
            Event::SendReservationReminder {
                reminder_id,
                reservation_id,
                phone,
            } => (reminder_id, reservation_id, phone),
            _ => return,
        };

        let reservation_id = match reservation_id {
            Some(reservation_id) => reservation_id,
            None => {
                debug!(
                    "Send-event for reminder {} carries no reservation, dropping",
                    reminder_id
                );
                return;
            }
        };
        let reservation = match ctx.repos.reservations.find(reservation_id).await {
            Some(reservation) => reservation,
            None => {
                debug!("No reservation {} found, dropping event", reservation_id);
                return;
            }
        };
        let resident = match ctx.repos.residents.find(&reservation.resident_id).await {
            Some(resident) => resident,
            None => {
                debug!(
                    "No resident found for reservation {}, dropping event",
                    reservation_id
                );
                return;
            }
        };

        let status = match ctx
            .notifier
            .send_reservation_key_reminder(
                reminder_id,
                phone,
                &resident.name,
                &reservation.hall_letter(),
            )
            .await
        {
            Ok(()) => ReminderStatus::Sent,
            Err(e) => {
                error!(
                    "Reservation key reminder for reminder {} failed: {:?}",
                    reminder_id, e
                );
                ReminderStatus::Failed
            }
        };

        let _ = ctx.bus.publish(
            Event::UpdateReminderStatus {
                reminder_id: reminder_id.clone(),
                status,
            },
            ctx,
        );
    }
}

/// Applies a dispatch outcome to the stored reminder.
pub struct UpdateReminderStatusOnEvent;

#[async_trait::async_trait]
impl EventListener for UpdateReminderStatusOnEvent {
    async fn handle(&self, event: &Event, ctx: &PortariusContext) {
        let (reminder_id, status) = match event {
            Event::UpdateReminderStatus {
                reminder_id,
                status,
            } => (reminder_id, status),
            _ => return,
        };

        let mut reminder = match ctx.repos.reminders.find(reminder_id).await {
            Some(reminder) => reminder,
            None => return,
        };

        reminder.status = *status;
        reminder.sent_at = Some(ctx.sys.now());

        if let Err(e) = ctx.repos.reminders.save(&reminder).await {
            error!("Unable to update reminder {}: {:?}", reminder_id, e);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::America::Sao_Paulo;
    use portarius_domain::{
        Package, PackageStatus, PaymentMethod, PaymentStatus, Reservation, ReservationStatus,
        Resident, ResidentType, ReminderChannel, SpaceType, ID,
    };
    use portarius_infra::{setup_context_inmemory, InMemoryNotifier, NotifierCall};

    async fn insert_resident(ctx: &PortariusContext) -> Resident {
        let resident = Resident {
            id: Default::default(),
            name: "Maria".into(),
            document: "123".into(),
            email: "maria@example.com".into(),
            phone: "11999999999".into(),
            apartment: "12".into(),
            block: "A".into(),
            resident_type: ResidentType::Tenant,
        };
        ctx.repos.residents.insert(&resident).await.unwrap();
        resident
    }

    async fn insert_package(ctx: &PortariusContext, resident: &Resident) -> Package {
        let package = Package {
            id: Default::default(),
            quantity: 1,
            resident_id: resident.id.clone(),
            description: "".into(),
            status: PackageStatus::Pending,
            delivered_to_id: None,
            received_at: ctx.sys.now(),
            delivered_at: None,
        };
        ctx.repos.packages.insert(&package).await.unwrap();
        package
    }

    async fn insert_reservation(ctx: &PortariusContext, resident: &Resident) -> Reservation {
        // Saturday evening
        let reservation = Reservation {
            id: Default::default(),
            resident_id: resident.id.clone(),
            space: SpaceType::Salon1,
            start_time: Sao_Paulo.ymd(2024, 6, 1).and_hms(18, 0, 0).with_timezone(&Utc),
            end_time: Sao_Paulo.ymd(2024, 6, 1).and_hms(23, 0, 0).with_timezone(&Utc),
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_amount: 70.0,
            payment_method: PaymentMethod::Pix,
            payment_date: None,
            description: "".into(),
            keys_taken_at: None,
            keys_returned_at: None,
            cancellation_reason: "".into(),
        };
        ctx.repos.reservations.insert(&reservation).await.unwrap();
        reservation
    }

    // Lets tasks spawned by an inner publish run to completion.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[actix_web::main]
    #[test]
    async fn package_created_creates_one_pending_whatsapp_reminder() {
        let ctx = setup_context_inmemory();
        let resident = insert_resident(&ctx).await;
        let package = insert_package(&ctx, &resident).await;

        CreateReminderOnPackageCreated
            .handle(
                &Event::PackageCreated {
                    package_id: package.id.clone(),
                    channel: ReminderChannel::WhatsApp,
                },
                &ctx,
            )
            .await;

        let reminders = ctx.repos.reminders.find_all().await.unwrap();
        assert_eq!(reminders.len(), 1);
        let reminder = &reminders[0];
        assert_eq!(reminder.recipient, "11999999999");
        assert_eq!(reminder.channel, ReminderChannel::WhatsApp);
        assert_eq!(reminder.status, ReminderStatus::Pending);
        assert_eq!(reminder.package_id, Some(package.id));
        assert_eq!(reminder.reservation_id, None);
    }

    #[actix_web::main]
    #[test]
    async fn package_created_without_package_creates_nothing() {
        let ctx = setup_context_inmemory();

        CreateReminderOnPackageCreated
            .handle(
                &Event::PackageCreated {
                    package_id: ID::new(),
                    channel: ReminderChannel::WhatsApp,
                },
                &ctx,
            )
            .await;

        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn reservation_reminder_is_scheduled_on_the_preceding_business_day() {
        let ctx = setup_context_inmemory();
        let resident = insert_resident(&ctx).await;
        let reservation = insert_reservation(&ctx, &resident).await;

        CreateReminderOnReservationCreated
            .handle(
                &Event::ReservationCreated {
                    reservation_id: reservation.id.clone(),
                    start_time: reservation.start_time,
                    channel: ReminderChannel::WhatsApp,
                },
                &ctx,
            )
            .await;

        let reminders = ctx.repos.reminders.find_all().await.unwrap();
        assert_eq!(reminders.len(), 1);
        let reminder = &reminders[0];
        assert_eq!(reminder.reservation_id, Some(reservation.id));
        assert_eq!(reminder.package_id, None);
        assert_eq!(reminder.status, ReminderStatus::Pending);
        // Saturday 2024-06-01 backs off to Friday noon
        assert_eq!(
            reminder.scheduled_at,
            Sao_Paulo.ymd(2024, 5, 31).and_hms(12, 0, 0).with_timezone(&Utc)
        );
    }

    #[actix_web::main]
    #[test]
    async fn send_reservation_reminder_dispatches_and_marks_sent() {
        let mut ctx = setup_context_inmemory();
        let notifier = std::sync::Arc::new(InMemoryNotifier::new());
        ctx.notifier = notifier.clone();
        register_reminder_listeners(&ctx);

        let resident = insert_resident(&ctx).await;
        let reservation = insert_reservation(&ctx, &resident).await;
        let reminder = Reminder {
            id: Default::default(),
            recipient: resident.phone.clone(),
            scheduled_at: ctx.sys.now(),
            sent_at: None,
            reservation_id: Some(reservation.id.clone()),
            package_id: None,
            channel: ReminderChannel::WhatsApp,
            status: ReminderStatus::Pending,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let handles = ctx.bus.publish(
            Event::SendReservationReminder {
                reminder_id: reminder.id.clone(),
                reservation_id: Some(reservation.id.clone()),
                phone: reminder.recipient.clone(),
            },
            &ctx,
        );
        for handle in handles {
            handle.await.unwrap();
        }
        settle().await;

        let calls = notifier.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![NotifierCall::ReservationKey {
                reminder_id: reminder.id.clone(),
                phone: "11999999999".into(),
                resident_name: "Maria".into(),
                hall: "1".into(),
            }]
        );

        let updated = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(updated.status, ReminderStatus::Sent);
        assert!(updated.sent_at.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn failed_dispatch_marks_the_reminder_failed() {
        let mut ctx = setup_context_inmemory();
        ctx.notifier = std::sync::Arc::new(InMemoryNotifier::failing());
        register_reminder_listeners(&ctx);

        let resident = insert_resident(&ctx).await;
        let package = insert_package(&ctx, &resident).await;
        let reminder = Reminder {
            id: Default::default(),
            recipient: resident.phone.clone(),
            scheduled_at: ctx.sys.now(),
            sent_at: None,
            reservation_id: None,
            package_id: Some(package.id.clone()),
            channel: ReminderChannel::WhatsApp,
            status: ReminderStatus::Pending,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let handles = ctx.bus.publish(
            Event::SendPackageReminder {
                reminder_id: reminder.id.clone(),
                package_id: Some(package.id),
                phone: reminder.recipient.clone(),
            },
            &ctx,
        );
        for handle in handles {
            handle.await.unwrap();
        }
        settle().await;

        let updated = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(updated.status, ReminderStatus::Failed);
    }

    #[actix_web::main]
    #[test]
    async fn status_updates_for_unknown_reminders_are_skipped() {
        let ctx = setup_context_inmemory();

        UpdateReminderStatusOnEvent
            .handle(
                &Event::UpdateReminderStatus {
                    reminder_id: ID::new(),
                    status: ReminderStatus::Sent,
                },
                &ctx,
            )
            .await;

        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());
    }
}
