use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::delete_reservation::*;
use portarius_domain::{Reservation, ID};
use portarius_infra::PortariusContext;

pub async fn delete_reservation_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = DeleteReservationUseCase {
        reservation_id: path_params.reservation_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reservation| HttpResponse::Ok().json(APIResponse::new(reservation)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct DeleteReservationUseCase {
    pub reservation_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reservation_id) => Self::NotFound(format!(
                "The reservation with id: {}, was not found.",
                reservation_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReservationUseCase {
    type Response = Reservation;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReservation";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reservations
            .delete(&self.reservation_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reservation_id.clone()))
    }
}
