use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::create_inventory_item::*;
use portarius_domain::{InventoryItem, InventoryType, ID};
use portarius_infra::PortariusContext;

pub async fn create_inventory_item_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateInventoryItemUseCase {
        name: body.name,
        description: body.description.unwrap_or_default(),
        quantity: body.quantity,
        owner_id: body.owner_id,
        inventory_type: body.inventory_type,
    };

    execute(usecase, &ctx)
        .await
        .map(|item| HttpResponse::Created().json(APIResponse::new(item)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct CreateInventoryItemUseCase {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub owner_id: ID,
    pub inventory_type: InventoryType,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    OwnerNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::OwnerNotFound(owner_id) => {
                Self::NotFound(format!("The resident with id: {}, was not found.", owner_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateInventoryItemUseCase {
    type Response = InventoryItem;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateInventoryItem";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.residents.find(&self.owner_id).await.is_none() {
            return Err(UseCaseError::OwnerNotFound(self.owner_id.clone()));
        }

        let item = InventoryItem {
            id: Default::default(),
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
            owner_id: self.owner_id.clone(),
            last_updated: ctx.sys.now(),
            inventory_type: self.inventory_type,
        };

        ctx.repos
            .inventory
            .insert(&item)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(item)
    }
}
