use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::get_packages::*;
use portarius_domain::Package;
use portarius_infra::PortariusContext;

pub async fn get_packages_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = GetPackagesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|packages| HttpResponse::Ok().json(APIResponse::new(packages)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct GetPackagesUseCase {}

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
impl UseCase for GetPackagesUseCase {
    type Response = Vec<Package>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPackages";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .packages
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
