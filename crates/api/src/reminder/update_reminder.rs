use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use portarius_api_structs::update_reminder::*;
use portarius_domain::{Reminder, ReminderChannel, ReminderStatus, ID};
use portarius_infra::PortariusContext;

pub async fn update_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        recipient: body.recipient,
        scheduled_at: body.scheduled_at,
        channel: body.channel,
        status: body.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub recipient: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub channel: Option<ReminderChannel>,
    pub status: Option<ReminderStatus>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        if let Some(recipient) = &self.recipient {
            reminder.recipient = recipient.clone();
        }
        if let Some(scheduled_at) = self.scheduled_at {
            reminder.scheduled_at = scheduled_at;
        }
        if let Some(channel) = self.channel {
            reminder.channel = channel;
        }
        if let Some(status) = self.status {
            reminder.status = status;
        }

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}
