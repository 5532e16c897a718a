use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::get_inventory_items::*;
use portarius_domain::InventoryItem;
use portarius_infra::PortariusContext;

pub async fn get_inventory_items_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = GetInventoryItemsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|items| HttpResponse::Ok().json(APIResponse::new(items)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct GetInventoryItemsUseCase {}

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
impl UseCase for GetInventoryItemsUseCase {
    type Response = Vec<InventoryItem>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetInventoryItems";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .inventory
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
