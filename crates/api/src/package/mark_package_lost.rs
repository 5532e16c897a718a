use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::mark_package_lost::*;
use portarius_domain::{Package, PackageStatus, ID};
use portarius_infra::PortariusContext;

pub async fn mark_package_lost_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = MarkPackageLostUseCase {
        package_id: path_params.package_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|package| HttpResponse::Ok().json(APIResponse::new(package)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct MarkPackageLostUseCase {
    pub package_id: ID,
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
impl UseCase for MarkPackageLostUseCase {
    type Response = Package;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkPackageLost";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut package = match ctx.repos.packages.find(&self.package_id).await {
            Some(package) => package,
            None => return Err(UseCaseError::NotFound(self.package_id.clone())),
        };

        package.status = PackageStatus::Lost;
        package.delivered_at = Some(ctx.sys.now());

        ctx.repos
            .packages
            .save(&package)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(package)
    }
}
