use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::{
    get_reminder_by_package, get_reminder_by_reservation, get_reminders_by_channel,
    get_reminders_by_recipient, get_reminders_by_status, ReminderResponse, RemindersResponse,
};
use portarius_domain::{Reminder, ReminderChannel, ReminderStatus};
use portarius_infra::PortariusContext;

/// Which slice of the reminder list a query route asks for.
#[derive(Debug)]
pub enum ReminderFilter {
    All,
    Status(ReminderStatus),
    Channel(ReminderChannel),
    Recipient(String),
    Pending,
}

pub async fn get_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    find(ReminderFilter::All, &ctx).await
}

pub async fn get_reminders_by_status_controller(
    http_req: HttpRequest,
    path_params: web::Path<get_reminders_by_status::PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    let status = path_params.status.parse().map_err(|_| {
        PortariusError::BadClientData(format!("Invalid status: {}", path_params.status))
    })?;
    find(ReminderFilter::Status(status), &ctx).await
}

pub async fn get_reminders_by_channel_controller(
    http_req: HttpRequest,
    path_params: web::Path<get_reminders_by_channel::PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    let channel = path_params.channel.parse().map_err(|_| {
        PortariusError::BadClientData(format!("Invalid channel: {}", path_params.channel))
    })?;
    find(ReminderFilter::Channel(channel), &ctx).await
}

pub async fn get_reminders_by_recipient_controller(
    http_req: HttpRequest,
    path_params: web::Path<get_reminders_by_recipient::PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    find(
        ReminderFilter::Recipient(path_params.recipient.clone()),
        &ctx,
    )
    .await
}

pub async fn get_pending_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;
    find(ReminderFilter::Pending, &ctx).await
}

pub async fn get_reminder_by_reservation_controller(
    http_req: HttpRequest,
    path_params: web::Path<get_reminder_by_reservation::PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    match ctx
        .repos
        .reminders
        .find_by_reservation(&path_params.reservation_id)
        .await
    {
        Some(reminder) => Ok(HttpResponse::Ok().json(ReminderResponse::new(reminder))),
        None => Err(PortariusError::NotFound(format!(
            "No reminder for reservation with id: {}, was found.",
            path_params.reservation_id
        ))),
    }
}

pub async fn get_reminder_by_package_controller(
    http_req: HttpRequest,
    path_params: web::Path<get_reminder_by_package::PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    match ctx
        .repos
        .reminders
        .find_by_package(&path_params.package_id)
        .await
    {
        Some(reminder) => Ok(HttpResponse::Ok().json(ReminderResponse::new(reminder))),
        None => Err(PortariusError::NotFound(format!(
            "No reminder for package with id: {}, was found.",
            path_params.package_id
        ))),
    }
}

async fn find(
    filter: ReminderFilter,
    ctx: &PortariusContext,
) -> Result<HttpResponse, PortariusError> {
    let usecase = FindRemindersUseCase { filter };

    execute(usecase, ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(RemindersResponse::new(reminders)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct FindRemindersUseCase {
    pub filter: ReminderFilter,
}

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
impl UseCase for FindRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "FindReminders";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let repo = &ctx.repos.reminders;
        let reminders = match &self.filter {
            ReminderFilter::All => repo.find_all().await,
            ReminderFilter::Status(status) => repo.find_by_status(*status).await,
            ReminderFilter::Channel(channel) => repo.find_by_channel(*channel).await,
            ReminderFilter::Recipient(recipient) => repo.find_by_recipient(recipient).await,
            ReminderFilter::Pending => repo.find_by_pending_status().await,
        };

        reminders.map_err(|_| UseCaseError::StorageError)
    }
}
