use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::delete_inventory_item::*;
use portarius_domain::{InventoryItem, ID};
use portarius_infra::PortariusContext;

pub async fn delete_inventory_item_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = DeleteInventoryItemUseCase {
        item_id: path_params.item_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|item| HttpResponse::Ok().json(APIResponse::new(item)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct DeleteInventoryItemUseCase {
    pub item_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(item_id) => Self::NotFound(format!(
                "The inventory item with id: {}, was not found.",
                item_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteInventoryItemUseCase {
    type Response = InventoryItem;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteInventoryItem";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .inventory
            .delete(&self.item_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.item_id.clone()))
    }
}
