use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use portarius_api_structs::update_reservation::*;
use portarius_domain::{
    is_national_holiday, reservation_payment_amount, PaymentMethod, Reservation, SpaceType, ID,
};
use portarius_infra::PortariusContext;

pub async fn update_reservation_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateReservationUseCase {
        reservation_id: path_params.reservation_id.clone(),
        space: body.space,
        start_time: body.start_time,
        end_time: body.end_time,
        payment_method: body.payment_method,
        description: body.description,
    };

    execute(usecase, &ctx)
        .await
        .map(|reservation| HttpResponse::Ok().json(APIResponse::new(reservation)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct UpdateReservationUseCase {
    pub reservation_id: ID,
    pub space: Option<SpaceType>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub payment_method: Option<PaymentMethod>,
    pub description: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    Conflict,
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reservation_id) => Self::NotFound(format!(
                "The reservation with id: {}, was not found.",
                reservation_id
            )),
            UseCaseError::Conflict => Self::Conflict(
                "There already is a reservation for this space in the selected timespan".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReservationUseCase {
    type Response = Reservation;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReservation";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut reservation = match ctx.repos.reservations.find(&self.reservation_id).await {
            Some(reservation) => reservation,
            None => return Err(UseCaseError::NotFound(self.reservation_id.clone())),
        };

        let space = self.space.unwrap_or(reservation.space);
        let start_time = self.start_time.unwrap_or(reservation.start_time);
        let end_time = self.end_time.unwrap_or(reservation.end_time);

        let rescheduled = space != reservation.space
            || start_time != reservation.start_time
            || end_time != reservation.end_time;
        if rescheduled {
            let conflict = ctx
                .repos
                .reservations
                .conflict_exists(space, start_time, end_time, Some(&reservation.id))
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            if conflict {
                return Err(UseCaseError::Conflict);
            }

            reservation.space = space;
            reservation.start_time = start_time;
            reservation.end_time = end_time;
            reservation.payment_amount = reservation_payment_amount(
                &reservation.start_time,
                ctx.config.timezone,
                is_national_holiday,
            );
        }

        if let Some(payment_method) = self.payment_method {
            reservation.payment_method = payment_method;
        }
        if let Some(description) = &self.description {
            reservation.description = description.clone();
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
    use chrono::TimeZone;
    use chrono_tz::America::Sao_Paulo;
    use portarius_domain::{
        PaymentStatus, Resident, ResidentType, ReservationStatus, HOLIDAY_PAYMENT_AMOUNT,
        WEEKDAY_PAYMENT_AMOUNT,
    };
    use portarius_infra::setup_context_inmemory;

    async fn insert_reservation(ctx: &PortariusContext) -> Reservation {
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

        // Saturday evening, holiday rate
        let reservation = Reservation {
            id: Default::default(),
            resident_id: resident.id,
            space: SpaceType::Salon1,
            start_time: Sao_Paulo.ymd(2024, 6, 1).and_hms(18, 0, 0).with_timezone(&Utc),
            end_time: Sao_Paulo.ymd(2024, 6, 1).and_hms(23, 0, 0).with_timezone(&Utc),
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_amount: HOLIDAY_PAYMENT_AMOUNT,
            payment_method: portarius_domain::PaymentMethod::Pix,
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
    async fn rescheduling_recomputes_the_payment_amount() {
        let ctx = setup_context_inmemory();
        let reservation = insert_reservation(&ctx).await;

        // Moved to Monday evening
        let mut usecase = UpdateReservationUseCase {
            reservation_id: reservation.id.clone(),
            space: None,
            start_time: Some(Sao_Paulo.ymd(2024, 6, 3).and_hms(18, 0, 0).with_timezone(&Utc)),
            end_time: Some(Sao_Paulo.ymd(2024, 6, 3).and_hms(23, 0, 0).with_timezone(&Utc)),
            payment_method: None,
            description: None,
        };

        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.payment_amount, WEEKDAY_PAYMENT_AMOUNT);
    }

    #[actix_web::main]
    #[test]
    async fn updating_the_description_keeps_the_timespan() {
        let ctx = setup_context_inmemory();
        let reservation = insert_reservation(&ctx).await;

        let mut usecase = UpdateReservationUseCase {
            reservation_id: reservation.id.clone(),
            space: None,
            start_time: None,
            end_time: None,
            payment_method: None,
            description: Some("Anniversary".into()),
        };

        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.description, "Anniversary");
        assert_eq!(updated.start_time, reservation.start_time);
        assert_eq!(updated.payment_amount, HOLIDAY_PAYMENT_AMOUNT);
    }
}
