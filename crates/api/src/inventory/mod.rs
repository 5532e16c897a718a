mod create_inventory_item;
mod delete_inventory_item;
mod get_inventory_item;
mod get_inventory_items;
mod update_inventory_item;

use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use create_inventory_item::create_inventory_item_controller;
use delete_inventory_item::delete_inventory_item_controller;
use get_inventory_item::get_inventory_item_controller;
use get_inventory_items::get_inventory_items_controller;
use portarius_api_structs::get_inventory_types;
use portarius_domain::InventoryType;
use portarius_infra::PortariusContext;
use update_inventory_item::update_inventory_item_controller;

async fn get_inventory_types_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(get_inventory_types::APIResponse::new(InventoryType::all())))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/inventory", web::post().to(create_inventory_item_controller));
    cfg.route("/inventory", web::get().to(get_inventory_items_controller));
    cfg.route(
        "/inventory/types",
        web::get().to(get_inventory_types_controller),
    );
    cfg.route(
        "/inventory/{item_id}",
        web::get().to(get_inventory_item_controller),
    );
    cfg.route(
        "/inventory/{item_id}",
        web::put().to(update_inventory_item_controller),
    );
    cfg.route(
        "/inventory/{item_id}",
        web::delete().to(delete_inventory_item_controller),
    );
}
