use super::create_reservation::CreateReservationUseCase;
use crate::shared::usecase::Subscriber;
use portarius_domain::{Event, Reservation, ReservationStatus, ReminderChannel};
use portarius_infra::PortariusContext;

/// Announces freshly stored reservations on the event bus so the
/// reminder listeners can schedule the key-pickup notification.
pub struct PublishReservationCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReservationUseCase> for PublishReservationCreated {
    async fn notify(&self, reservation: &Reservation, ctx: &PortariusContext) {
        if reservation.status != ReservationStatus::Pending
            && reservation.status != ReservationStatus::Confirmed
        {
            return;
        }

        // Sideeffect, completion is the listener's business
        let _ = ctx.bus.publish(
            Event::ReservationCreated {
                reservation_id: reservation.id.clone(),
                start_time: reservation.start_time,
                channel: ReminderChannel::WhatsApp,
            },
            ctx,
        );
    }
}
