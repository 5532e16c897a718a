use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::update_inventory_item::*;
use portarius_domain::{InventoryItem, InventoryType, ID};
use portarius_infra::PortariusContext;

pub async fn update_inventory_item_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateInventoryItemUseCase {
        item_id: path_params.item_id.clone(),
        name: body.name,
        description: body.description,
        quantity: body.quantity,
        owner_id: body.owner_id,
        inventory_type: body.inventory_type,
    };

    execute(usecase, &ctx)
        .await
        .map(|item| HttpResponse::Ok().json(APIResponse::new(item)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct UpdateInventoryItemUseCase {
    pub item_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub owner_id: Option<ID>,
    pub inventory_type: Option<InventoryType>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(item_id) => Self::NotFound(format!(
                "The inventory item with id: {}, was not found.",
                item_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateInventoryItemUseCase {
    type Response = InventoryItem;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateInventoryItem";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut item = match ctx.repos.inventory.find(&self.item_id).await {
            Some(item) => item,
            None => return Err(UseCaseError::NotFound(self.item_id.clone())),
        };

        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(owner_id) = &self.owner_id {
            item.owner_id = owner_id.clone();
        }
        if let Some(inventory_type) = self.inventory_type {
            item.inventory_type = inventory_type;
        }
        item.last_updated = ctx.sys.now();

        ctx.repos
            .inventory
            .save(&item)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(item)
    }
}
