use super::subscribers::PublishReservationCreated;
use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use portarius_api_structs::create_reservation::*;
use portarius_domain::{
    is_national_holiday, reservation_payment_amount, PaymentMethod, PaymentStatus, Reservation,
    ReservationStatus, SpaceType, ID,
};
use portarius_infra::PortariusContext;

pub async fn create_reservation_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateReservationUseCase {
        resident_id: body.resident_id,
        space: body.space,
        start_time: body.start_time,
        end_time: body.end_time,
        payment_method: body.payment_method,
        description: body.description.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reservation| HttpResponse::Created().json(APIResponse::new(reservation)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct CreateReservationUseCase {
    pub resident_id: ID,
    pub space: SpaceType,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub description: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ResidentNotFound(ID),
    InvalidTimespan,
    Conflict,
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ResidentNotFound(resident_id) => Self::NotFound(format!(
                "The resident with id: {}, was not found.",
                resident_id
            )),
            UseCaseError::InvalidTimespan => {
                Self::BadClientData("The reservation ends before it starts".into())
            }
            UseCaseError::Conflict => Self::Conflict(
                "There already is a reservation for this space in the selected timespan".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReservationUseCase {
    type Response = Reservation;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReservation";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        if self.end_time < self.start_time {
            return Err(UseCaseError::InvalidTimespan);
        }

        if ctx.repos.residents.find(&self.resident_id).await.is_none() {
            return Err(UseCaseError::ResidentNotFound(self.resident_id.clone()));
        }

        let conflict = ctx
            .repos
            .reservations
            .conflict_exists(self.space, self.start_time, self.end_time, None)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if conflict {
            return Err(UseCaseError::Conflict);
        }

        let reservation = Reservation {
            id: Default::default(),
            resident_id: self.resident_id.clone(),
            space: self.space,
            start_time: self.start_time,
            end_time: self.end_time,
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_amount: reservation_payment_amount(
                &self.start_time,
                ctx.config.timezone,
                is_national_holiday,
            ),
            payment_method: self.payment_method,
            payment_date: None,
            description: self.description.clone(),
            keys_taken_at: None,
            keys_returned_at: None,
            cancellation_reason: "".into(),
        };

        ctx.repos
            .reservations
            .insert(&reservation)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reservation)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishReservationCreated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::Sao_Paulo;
    use portarius_domain::{Resident, ResidentType, HOLIDAY_PAYMENT_AMOUNT};
    use portarius_infra::setup_context_inmemory;

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

    fn saturday_evening() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Sao_Paulo.ymd(2024, 6, 1).and_hms(18, 0, 0).with_timezone(&Utc),
            Sao_Paulo.ymd(2024, 6, 1).and_hms(23, 0, 0).with_timezone(&Utc),
        )
    }

    #[actix_web::main]
    #[test]
    async fn creates_a_pending_reservation_with_weekend_rate() {
        let ctx = setup_context_inmemory();
        let resident = insert_resident(&ctx).await;
        let (start, end) = saturday_evening();

        let mut usecase = CreateReservationUseCase {
            resident_id: resident.id.clone(),
            space: SpaceType::Salon1,
            start_time: start,
            end_time: end,
            payment_method: PaymentMethod::Pix,
            description: "Birthday".into(),
        };

        let reservation = usecase.execute(&ctx).await.unwrap();
        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.payment_status, PaymentStatus::Pending);
        assert_eq!(reservation.payment_amount, HOLIDAY_PAYMENT_AMOUNT);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_overlapping_reservations() {
        let ctx = setup_context_inmemory();
        let resident = insert_resident(&ctx).await;
        let (start, end) = saturday_evening();

        let mut usecase = CreateReservationUseCase {
            resident_id: resident.id.clone(),
            space: SpaceType::Salon1,
            start_time: start,
            end_time: end,
            payment_method: PaymentMethod::Pix,
            description: "".into(),
        };
        usecase.execute(&ctx).await.unwrap();

        let mut overlapping = CreateReservationUseCase {
            resident_id: resident.id.clone(),
            space: SpaceType::Salon1,
            start_time: start,
            end_time: end,
            payment_method: PaymentMethod::Pix,
            description: "".into(),
        };
        let res = overlapping.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::Conflict);

        // The other salon remains bookable
        let mut other_space = CreateReservationUseCase {
            resident_id: resident.id.clone(),
            space: SpaceType::Salon2,
            start_time: start,
            end_time: end,
            payment_method: PaymentMethod::Pix,
            description: "".into(),
        };
        assert!(other_space.execute(&ctx).await.is_ok());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_reservations_ending_before_they_start() {
        let ctx = setup_context_inmemory();
        let resident = insert_resident(&ctx).await;
        let (start, end) = saturday_evening();

        let mut usecase = CreateReservationUseCase {
            resident_id: resident.id,
            space: SpaceType::Salon1,
            start_time: end,
            end_time: start,
            payment_method: PaymentMethod::Pix,
            description: "".into(),
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidTimespan);
    }
}
