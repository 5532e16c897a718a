mod create_package;
mod delete_package;
mod get_package;
mod get_packages;
mod mark_package_delivered;
mod mark_package_lost;
mod subscribers;
mod update_package;

use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use create_package::create_package_controller;
use delete_package::delete_package_controller;
use get_package::get_package_controller;
use get_packages::get_packages_controller;
use mark_package_delivered::mark_package_delivered_controller;
use mark_package_lost::mark_package_lost_controller;
use portarius_api_structs::get_package_statuses;
use portarius_domain::PackageStatus;
use portarius_infra::PortariusContext;
use update_package::update_package_controller;

async fn get_package_statuses_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(get_package_statuses::APIResponse::new(PackageStatus::all())))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/packages", web::post().to(create_package_controller));
    cfg.route("/packages", web::get().to(get_packages_controller));
    cfg.route(
        "/packages/status",
        web::get().to(get_package_statuses_controller),
    );
    cfg.route(
        "/packages/{package_id}",
        web::get().to(get_package_controller),
    );
    cfg.route(
        "/packages/{package_id}",
        web::put().to(update_package_controller),
    );
    cfg.route(
        "/packages/{package_id}",
        web::delete().to(delete_package_controller),
    );
    cfg.route(
        "/packages/{package_id}/deliver",
        web::put().to(mark_package_delivered_controller),
    );
    cfg.route(
        "/packages/{package_id}/lost",
        web::put().to(mark_package_lost_controller),
    );
}
