mod create_resident;
mod delete_resident;
mod get_resident;
mod get_residents;
mod update_resident;

use actix_web::web;
use create_resident::create_resident_controller;
use delete_resident::delete_resident_controller;
use get_resident::get_resident_controller;
use get_residents::get_residents_controller;
use update_resident::update_resident_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/residents", web::post().to(create_resident_controller));
    cfg.route("/residents", web::get().to(get_residents_controller));
    cfg.route(
        "/residents/{resident_id}",
        web::get().to(get_resident_controller),
    );
    cfg.route(
        "/residents/{resident_id}",
        web::put().to(update_resident_controller),
    );
    cfg.route(
        "/residents/{resident_id}",
        web::delete().to(delete_resident_controller),
    );
}
