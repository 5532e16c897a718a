use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::get_users::*;
use portarius_domain::User;
use portarius_infra::PortariusContext;

pub async fn get_users_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = GetUsersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|users| HttpResponse::Ok().json(APIResponse::new(users)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct GetUsersUseCase {}

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
impl UseCase for GetUsersUseCase {
    type Response = Vec<User>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUsers";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .users
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
