use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::get_residents::*;
use portarius_domain::Resident;
use portarius_infra::PortariusContext;

pub async fn get_residents_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = GetResidentsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|residents| HttpResponse::Ok().json(APIResponse::new(residents)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct GetResidentsUseCase {}

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
impl UseCase for GetResidentsUseCase {
    type Response = Vec<Resident>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetResidents";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .residents
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
