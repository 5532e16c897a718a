use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::update_package::*;
use portarius_domain::{Package, PackageStatus, ID};
use portarius_infra::PortariusContext;

pub async fn update_package_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdatePackageUseCase {
        package_id: path_params.package_id.clone(),
        quantity: body.quantity,
        resident_id: body.resident_id,
        description: body.description,
        status: body.status,
        delivered_to_id: body.delivered_to_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|package| HttpResponse::Ok().json(APIResponse::new(package)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct UpdatePackageUseCase {
    pub package_id: ID,
    pub quantity: Option<i32>,
    pub resident_id: Option<ID>,
    pub description: Option<String>,
    pub status: Option<PackageStatus>,
    pub delivered_to_id: Option<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(package_id) => {
                Self::NotFound(format!("The package with id: {}, was not found.", package_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdatePackageUseCase {
    type Response = Package;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdatePackage";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut package = match ctx.repos.packages.find(&self.package_id).await {
            Some(package) => package,
            None => return Err(UseCaseError::NotFound(self.package_id.clone())),
        };

        if let Some(quantity) = self.quantity {
            package.quantity = quantity;
        }
        if let Some(resident_id) = &self.resident_id {
            package.resident_id = resident_id.clone();
        }
        if let Some(description) = &self.description {
            package.description = description.clone();
        }
        if let Some(status) = self.status {
            package.status = status;
        }
        if let Some(delivered_to_id) = &self.delivered_to_id {
            package.delivered_to_id = Some(delivered_to_id.clone());
        }

        ctx.repos
            .packages
            .save(&package)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(package)
    }
}
