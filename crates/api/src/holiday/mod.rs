mod get_holidays;

use actix_web::web;
use get_holidays::get_holidays_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/holidays/{year}", web::get().to(get_holidays_controller));
}
