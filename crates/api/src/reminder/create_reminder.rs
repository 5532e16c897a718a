use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use portarius_api_structs::create_reminder::*;
use portarius_domain::{Reminder, ReminderChannel, ReminderStatus, ID};
use portarius_infra::PortariusContext;

pub async fn create_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateReminderUseCase {
        recipient: body.recipient,
        scheduled_at: body.scheduled_at,
        reservation_id: body.reservation_id,
        package_id: body.package_id,
        channel: body.channel.unwrap_or(ReminderChannel::WhatsApp),
        status: body.status.unwrap_or(ReminderStatus::Pending),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub recipient: String,
    pub scheduled_at: DateTime<Utc>,
    pub reservation_id: Option<ID>,
    pub package_id: Option<ID>,
    pub channel: ReminderChannel,
    pub status: ReminderStatus,
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
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let reminder = Reminder {
            id: Default::default(),
            recipient: self.recipient.clone(),
            scheduled_at: self.scheduled_at,
            sent_at: None,
            reservation_id: self.reservation_id.clone(),
            package_id: self.package_id.clone(),
            channel: self.channel,
            status: self.status,
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
