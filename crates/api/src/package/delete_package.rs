use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::delete_package::*;
use portarius_domain::{Package, ID};
use portarius_infra::PortariusContext;

pub async fn delete_package_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = DeletePackageUseCase {
        package_id: path_params.package_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|package| HttpResponse::Ok().json(APIResponse::new(package)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct DeletePackageUseCase {
    pub package_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(package_id) => {
                Self::NotFound(format!("The package with id: {}, was not found.", package_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeletePackageUseCase {
    type Response = Package;

    type Error = UseCaseError;

    const NAME: &'static str = "DeletePackage";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .packages
            .delete(&self.package_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.package_id.clone()))
    }
}
