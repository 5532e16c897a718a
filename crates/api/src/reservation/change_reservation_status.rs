use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::change_reservation_status::*;
use portarius_domain::{Reservation, ReservationStatus, ID};
use portarius_infra::PortariusContext;

pub async fn confirm_reservation_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    change_status(
        path_params.reservation_id.clone(),
        ReservationStatus::Confirmed,
        None,
        &ctx,
    )
    .await
}

pub async fn cancel_reservation_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    change_status(
        path_params.reservation_id.clone(),
        ReservationStatus::Cancelled,
        body.0.cancellation_reason,
        &ctx,
    )
    .await
}

pub async fn take_keys_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    change_status(
        path_params.reservation_id.clone(),
        ReservationStatus::KeysTaken,
        None,
        &ctx,
    )
    .await
}

pub async fn return_keys_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    change_status(
        path_params.reservation_id.clone(),
        ReservationStatus::KeysReturned,
        None,
        &ctx,
    )
    .await
}

pub async fn complete_reservation_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    change_status(
        path_params.reservation_id.clone(),
        ReservationStatus::KeysReturned,
        None,
        &ctx,
    )
    .await
}

async fn change_status(
    reservation_id: ID,
    target_status: ReservationStatus,
    cancellation_reason: Option<String>,
    ctx: &PortariusContext,
) -> Result<HttpResponse, PortariusError> {
    let usecase = ChangeReservationStatusUseCase {
        reservation_id,
        target_status,
        cancellation_reason,
    };

    execute(usecase, ctx)
        .await
        .map(|reservation| HttpResponse::Ok().json(APIResponse::new(reservation)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct ChangeReservationStatusUseCase {
    pub reservation_id: ID,
    pub target_status: ReservationStatus,
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    KeysNotTakeable(ReservationStatus),
    KeysNotReturnable(ReservationStatus),
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reservation_id) => Self::NotFound(format!(
                "The reservation with id: {}, was not found.",
                reservation_id
            )),
            UseCaseError::KeysNotTakeable(status) => Self::BadClientData(format!(
                "The reservation must be confirmed before the keys can be taken, current status: {}",
                status
            )),
            UseCaseError::KeysNotReturnable(status) => Self::BadClientData(format!(
                "The keys must have been taken before they can be returned, current status: {}",
                status
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ChangeReservationStatusUseCase {
    type Response = Reservation;

    type Error = UseCaseError;

    const NAME: &'static str = "ChangeReservationStatus";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut reservation = match ctx.repos.reservations.find(&self.reservation_id).await {
            Some(reservation) => reservation,
            None => return Err(UseCaseError::NotFound(self.reservation_id.clone())),
        };

        match self.target_status {
            ReservationStatus::KeysTaken => {
                if reservation.status != ReservationStatus::Confirmed {
                    return Err(UseCaseError::KeysNotTakeable(reservation.status));
                }
                reservation.keys_taken_at = Some(ctx.sys.now());
            }
            ReservationStatus::KeysReturned => {
                if reservation.status != ReservationStatus::KeysTaken {
                    return Err(UseCaseError::KeysNotReturnable(reservation.status));
                }
                reservation.keys_returned_at = Some(ctx.sys.now());
            }
            ReservationStatus::Cancelled => {
                reservation.cancellation_reason =
                    self.cancellation_reason.clone().unwrap_or_default();
            }
            _ => {}
        }
        reservation.status = self.target_status;

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
    use portarius_domain::{PaymentMethod, PaymentStatus, Resident, ResidentType, SpaceType};
    use portarius_infra::setup_context_inmemory;

    async fn insert_reservation(
        ctx: &PortariusContext,
        status: ReservationStatus,
    ) -> Reservation {
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
            status,
            payment_status: PaymentStatus::Pending,
            payment_amount: 0.0,
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

    #[actix_web::main]
    #[test]
    async fn keys_require_a_confirmed_reservation() {
        let ctx = setup_context_inmemory();
        let reservation = insert_reservation(&ctx, ReservationStatus::Pending).await;

        let mut usecase = ChangeReservationStatusUseCase {
            reservation_id: reservation.id.clone(),
            target_status: ReservationStatus::KeysTaken,
            cancellation_reason: None,
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::KeysNotTakeable(ReservationStatus::Pending)
        );
    }

    #[actix_web::main]
    #[test]
    async fn keys_can_be_taken_and_returned_in_order() {
        let ctx = setup_context_inmemory();
        let reservation = insert_reservation(&ctx, ReservationStatus::Confirmed).await;

        let mut take = ChangeReservationStatusUseCase {
            reservation_id: reservation.id.clone(),
            target_status: ReservationStatus::KeysTaken,
            cancellation_reason: None,
        };
        let taken = take.execute(&ctx).await.unwrap();
        assert_eq!(taken.status, ReservationStatus::KeysTaken);
        assert!(taken.keys_taken_at.is_some());

        let mut ret = ChangeReservationStatusUseCase {
            reservation_id: reservation.id.clone(),
            target_status: ReservationStatus::KeysReturned,
            cancellation_reason: None,
        };
        let returned = ret.execute(&ctx).await.unwrap();
        assert_eq!(returned.status, ReservationStatus::KeysReturned);
        assert!(returned.keys_returned_at.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn cancelling_stores_the_reason() {
        let ctx = setup_context_inmemory();
        let reservation = insert_reservation(&ctx, ReservationStatus::Pending).await;

        let mut usecase = ChangeReservationStatusUseCase {
            reservation_id: reservation.id.clone(),
            target_status: ReservationStatus::Cancelled,
            cancellation_reason: Some("Rain".into()),
        };
        let cancelled = usecase.execute(&ctx).await.unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
        assert_eq!(cancelled.cancellation_reason, "Rain");
    }
}
