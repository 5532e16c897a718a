use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::confirm_reservation_payment::*;
use portarius_domain::{PaymentMethod, PaymentStatus, Reservation, ReservationStatus, ID};
use portarius_infra::PortariusContext;

pub async fn confirm_reservation_payment_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = ConfirmReservationPaymentUseCase {
        reservation_id: path_params.reservation_id.clone(),
        payment_method: body.0.payment_method,
    };

    execute(usecase, &ctx)
        .await
        .map(|reservation| HttpResponse::Ok().json(APIResponse::new(reservation)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct ConfirmReservationPaymentUseCase {
    pub reservation_id: ID,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlreadyPaid,
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reservation_id) => Self::NotFound(format!(
                "The reservation with id: {}, was not found.",
                reservation_id
            )),
            UseCaseError::AlreadyPaid => {
                Self::BadClientData("The payment was already confirmed".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ConfirmReservationPaymentUseCase {
    type Response = Reservation;

    type Error = UseCaseError;

    const NAME: &'static str = "ConfirmReservationPayment";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut reservation = match ctx.repos.reservations.find(&self.reservation_id).await {
            Some(reservation) => reservation,
            None => return Err(UseCaseError::NotFound(self.reservation_id.clone())),
        };

        if reservation.payment_status == PaymentStatus::Paid {
            return Err(UseCaseError::AlreadyPaid);
        }

        reservation.payment_status = PaymentStatus::Paid;
        reservation.payment_date = Some(ctx.sys.now());
        reservation.status = ReservationStatus::Confirmed;
        if let Some(payment_method) = self.payment_method {
            reservation.payment_method = payment_method;
        }

        ctx.repos
            .reservations
            .save(&reservation)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reservation)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};
    use portarius_domain::{Resident, ResidentType, SpaceType};
    use portarius_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn confirming_payment_twice_is_rejected() {
        let ctx = setup_context_inmemory();
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

        let reservation = Reservation {
            id: Default::default(),
            resident_id: resident.id,
            space: SpaceType::Salon1,
            start_time: Utc.ymd(2024, 6, 1).and_hms(18, 0, 0),
            end_time: Utc.ymd(2024, 6, 1).and_hms(23, 0, 0),
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_amount: 45.0,
            payment_method: PaymentMethod::Pix,
            payment_date: None,
            description: "".into(),
            keys_taken_at: None,
            keys_returned_at: None,
            cancellation_reason: "".into(),
        };
        ctx.repos.reservations.insert(&reservation).await.unwrap();

        let mut usecase = ConfirmReservationPaymentUseCase {
            reservation_id: reservation.id.clone(),
            payment_method: None,
        };
        let paid = usecase.execute(&ctx).await.unwrap();
        assert_eq!(paid.payment_status, PaymentStatus::Paid);
        assert_eq!(paid.status, ReservationStatus::Confirmed);
        assert!(paid.payment_date.is_some());

        let mut again = ConfirmReservationPaymentUseCase {
            reservation_id: reservation.id.clone(),
            payment_method: None,
        };
        assert_eq!(again.execute(&ctx).await.unwrap_err(), UseCaseError::AlreadyPaid);
    }
}
