mod change_reservation_status;
mod confirm_reservation_payment;
mod create_reservation;
mod delete_reservation;
mod find_reservations;
mod get_reservation;
mod subscribers;
mod update_reservation;

use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use change_reservation_status::{
    cancel_reservation_controller, complete_reservation_controller, confirm_reservation_controller,
    return_keys_controller, take_keys_controller,
};
use confirm_reservation_payment::confirm_reservation_payment_controller;
use create_reservation::create_reservation_controller;
use delete_reservation::delete_reservation_controller;
use find_reservations::{
    get_reservations_by_date_range_controller, get_reservations_by_resident_controller,
    get_reservations_by_space_controller, get_reservations_by_status_controller,
    get_reservations_controller, get_upcoming_reservations_controller,
};
use get_reservation::get_reservation_controller;
use portarius_api_structs::get_reservation_enums::*;
use portarius_domain::{PaymentMethod, PaymentStatus, ReservationStatus, SpaceType};
use portarius_infra::PortariusContext;
use update_reservation::update_reservation_controller;

async fn get_reservation_statuses_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    Ok(HttpResponse::Ok().json(StatusesResponse {
        statuses: ReservationStatus::all(),
    }))
}

async fn get_space_types_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    Ok(HttpResponse::Ok().json(SpacesResponse {
        spaces: SpaceType::all(),
    }))
}

async fn get_payment_methods_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    Ok(HttpResponse::Ok().json(PaymentMethodsResponse {
        payment_methods: PaymentMethod::all(),
    }))
}

async fn get_payment_statuses_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    Ok(HttpResponse::Ok().json(PaymentStatusesResponse {
        payment_statuses: PaymentStatus::all(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reservations", web::post().to(create_reservation_controller));
    cfg.route("/reservations", web::get().to(get_reservations_controller));

    cfg.route(
        "/reservations/upcoming",
        web::get().to(get_upcoming_reservations_controller),
    );
    cfg.route(
        "/reservations/date-range",
        web::get().to(get_reservations_by_date_range_controller),
    );
    cfg.route(
        "/reservations/reservationStatus",
        web::get().to(get_reservation_statuses_controller),
    );
    cfg.route(
        "/reservations/spaceTypes",
        web::get().to(get_space_types_controller),
    );
    cfg.route(
        "/reservations/paymentMethods",
        web::get().to(get_payment_methods_controller),
    );
    cfg.route(
        "/reservations/paymentStatuses",
        web::get().to(get_payment_statuses_controller),
    );
    cfg.route(
        "/reservations/resident/{resident_id}",
        web::get().to(get_reservations_by_resident_controller),
    );
    cfg.route(
        "/reservations/space/{space}",
        web::get().to(get_reservations_by_space_controller),
    );
    cfg.route(
        "/reservations/status/{status}",
        web::get().to(get_reservations_by_status_controller),
    );

    cfg.route(
        "/reservations/{reservation_id}",
        web::get().to(get_reservation_controller),
    );
    cfg.route(
        "/reservations/{reservation_id}",
        web::put().to(update_reservation_controller),
    );
    cfg.route(
        "/reservations/{reservation_id}",
        web::delete().to(delete_reservation_controller),
    );

    cfg.route(
        "/reservations/{reservation_id}/confirm",
        web::put().to(confirm_reservation_controller),
    );
    cfg.route(
        "/reservations/{reservation_id}/cancel",
        web::put().to(cancel_reservation_controller),
    );
    cfg.route(
        "/reservations/{reservation_id}/take-keys",
        web::put().to(take_keys_controller),
    );
    cfg.route(
        "/reservations/{reservation_id}/return-keys",
        web::put().to(return_keys_controller),
    );
    cfg.route(
        "/reservations/{reservation_id}/complete",
        web::put().to(complete_reservation_controller),
    );
    cfg.route(
        "/reservations/{reservation_id}/confirm-payment",
        web::put().to(confirm_reservation_payment_controller),
    );
}
