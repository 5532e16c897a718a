use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::create_resident::*;
use portarius_domain::{Resident, ResidentType};
use portarius_infra::PortariusContext;

pub async fn create_resident_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateResidentUseCase {
        name: body.name,
        document: body.document,
        email: body.email,
        phone: body.phone,
        apartment: body.apartment,
        block: body.block,
        resident_type: body.resident_type.unwrap_or(ResidentType::Tenant),
    };

    execute(usecase, &ctx)
        .await
        .map(|resident| HttpResponse::Created().json(APIResponse::new(resident)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct CreateResidentUseCase {
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub apartment: String,
    pub block: String,
    pub resident_type: ResidentType,
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
impl UseCase for CreateResidentUseCase {
    type Response = Resident;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateResident";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let resident = Resident {
            id: Default::default(),
            name: self.name.clone(),
            document: self.document.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            apartment: self.apartment.clone(),
            block: self.block.clone(),
            resident_type: self.resident_type,
        };

        ctx.repos
            .residents
            .insert(&resident)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(resident)
    }
}
