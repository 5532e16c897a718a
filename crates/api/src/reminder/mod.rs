mod create_reminder;
mod delete_reminder;
mod events;
mod find_reminders;
mod get_reminder;
mod listeners;
mod send_due_reservation_reminders;
mod update_reminder;

pub use listeners::register_reminder_listeners;
pub(crate) use send_due_reservation_reminders::SendDueReservationRemindersUseCase;

use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use find_reminders::{
    get_pending_reminders_controller, get_reminder_by_package_controller,
    get_reminder_by_reservation_controller, get_reminders_by_channel_controller,
    get_reminders_by_recipient_controller, get_reminders_by_status_controller,
    get_reminders_controller,
};
use get_reminder::get_reminder_controller;
use portarius_api_structs::get_reminder_enums::*;
use portarius_domain::{ReminderChannel, ReminderStatus};
use portarius_infra::PortariusContext;
use update_reminder::update_reminder_controller;

async fn get_reminder_channels_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    Ok(HttpResponse::Ok().json(ChannelsResponse {
        channels: ReminderChannel::all(),
    }))
}

async fn get_reminder_statuses_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    Ok(HttpResponse::Ok().json(StatusesResponse {
        statuses: ReminderStatus::all(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_reminders_controller));

    cfg.route(
        "/reminders/pending",
        web::get().to(get_pending_reminders_controller),
    );
    cfg.route(
        "/reminders/reminderChannel",
        web::get().to(get_reminder_channels_controller),
    );
    cfg.route(
        "/reminders/reminderStatus",
        web::get().to(get_reminder_statuses_controller),
    );
    cfg.route(
        "/reminders/reservation/{reservation_id}",
        web::get().to(get_reminder_by_reservation_controller),
    );
    cfg.route(
        "/reminders/package/{package_id}",
        web::get().to(get_reminder_by_package_controller),
    );
    cfg.route(
        "/reminders/status/{status}",
        web::get().to(get_reminders_by_status_controller),
    );
    cfg.route(
        "/reminders/channel/{channel}",
        web::get().to(get_reminders_by_channel_controller),
    );
    cfg.route(
        "/reminders/recipient/{recipient}",
        web::get().to(get_reminders_by_recipient_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}
