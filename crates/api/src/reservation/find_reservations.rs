use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use portarius_api_structs::{
    get_reservations_by_date_range, get_reservations_by_resident, get_reservations_by_space,
    get_reservations_by_status, ReservationsResponse,
};
use portarius_domain::{Reservation, ReservationStatus, SpaceType, ID};
use portarius_infra::PortariusContext;

/// Which slice of the reservation list a query route asks for.
#[derive(Debug)]
pub enum ReservationFilter {
    All,
    Resident(ID),
    Space(SpaceType),
    Status(ReservationStatus),
    DateRange(DateTime<Utc>, DateTime<Utc>),
    Upcoming,
}

pub async fn get_reservations_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    find(ReservationFilter::All, &ctx).await
}

pub async fn get_reservations_by_resident_controller(
    http_req: HttpRequest,
    path_params: web::Path<get_reservations_by_resident::PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    find(
        ReservationFilter::Resident(path_params.resident_id.clone()),
        &ctx,
    )
    .await
}

pub async fn get_reservations_by_space_controller(
    http_req: HttpRequest,
    path_params: web::Path<get_reservations_by_space::PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    let space = path_params
        .space
        .parse()
        .map_err(|_| PortariusError::BadClientData(format!("Invalid space: {}", path_params.space)))?;
    find(ReservationFilter::Space(space), &ctx).await
}

pub async fn get_reservations_by_status_controller(
    http_req: HttpRequest,
    path_params: web::Path<get_reservations_by_status::PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    let status = path_params.status.parse().map_err(|_| {
        PortariusError::BadClientData(format!("Invalid status: {}", path_params.status))
    })?;
    find(ReservationFilter::Status(status), &ctx).await
}

pub async fn get_reservations_by_date_range_controller(
    http_req: HttpRequest,
    query_params: web::Query<get_reservations_by_date_range::QueryParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    find(
        ReservationFilter::DateRange(query_params.start_date, query_params.end_date),
        &ctx,
    )
    .await
}

pub async fn get_upcoming_reservations_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    find(ReservationFilter::Upcoming, &ctx).await
}

async fn find(
    filter: ReservationFilter,
    ctx: &PortariusContext,
) -> Result<HttpResponse, PortariusError> {
    let usecase = FindReservationsUseCase { filter };

    execute(usecase, ctx)
        .await
        .map(|reservations| HttpResponse::Ok().json(ReservationsResponse::new(reservations)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct FindReservationsUseCase {
    pub filter: ReservationFilter,
}

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
impl UseCase for FindReservationsUseCase {
    type Response = Vec<Reservation>;

    type Error = UseCaseError;

    const NAME: &'static str = "FindReservations";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let repo = &ctx.repos.reservations;
        let reservations = match &self.filter {
            ReservationFilter::All => repo.find_all().await,
            ReservationFilter::Resident(resident_id) => repo.find_by_resident(resident_id).await,
            ReservationFilter::Space(space) => repo.find_by_space(*space).await,
            ReservationFilter::Status(status) => repo.find_by_status(*status).await,
            ReservationFilter::DateRange(start, end) => repo.find_by_date_range(*start, *end).await,
            ReservationFilter::Upcoming => repo.find_upcoming(ctx.sys.now()).await,
        };

        reservations.map_err(|_| UseCaseError::StorageError)
    }
}
