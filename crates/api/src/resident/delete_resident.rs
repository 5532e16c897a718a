use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::delete_resident::*;
use portarius_domain::{Resident, ID};
use portarius_infra::PortariusContext;

pub async fn delete_resident_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = DeleteResidentUseCase {
        resident_id: path_params.resident_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|resident| HttpResponse::Ok().json(APIResponse::new(resident)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct DeleteResidentUseCase {
    pub resident_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(resident_id) => Self::NotFound(format!(
                "The resident with id: {}, was not found.",
                resident_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteResidentUseCase {
    type Response = Resident;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteResident";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .residents
            .delete(&self.resident_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.resident_id.clone()))
    }
}
