use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::mark_package_delivered::*;
use portarius_domain::{Package, PackageStatus, ID};
use portarius_infra::PortariusContext;

pub async fn mark_package_delivered_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = MarkPackageDeliveredUseCase {
        package_id: path_params.package_id.clone(),
        delivered_to_id: body.0.delivered_to_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|package| HttpResponse::Ok().json(APIResponse::new(package)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct MarkPackageDeliveredUseCase {
    pub package_id: ID,
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
impl UseCase for MarkPackageDeliveredUseCase {
    type Response = Package;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkPackageDelivered";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut package = match ctx.repos.packages.find(&self.package_id).await {
            Some(package) => package,
            None => return Err(UseCaseError::NotFound(self.package_id.clone())),
        };

        package.status = PackageStatus::Delivered;
        package.delivered_at = Some(ctx.sys.now());
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

#[cfg(test)]
mod test {
    use super::*;
    use portarius_domain::{Resident, ResidentType};
    use portarius_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn marks_a_package_as_delivered() {
        let ctx = setup_context_inmemory();
        let resident = Resident {
            id: Default::default(),
            name: "Maria".into(),
            document: "123".into(),
            email: "maria@example.com".into(),
            phone: "11999999999".into(),
            apartment: "12".into(),
            block: "A".into(),
            resident_type: ResidentType::Tenant,
        };
        ctx.repos.residents.insert(&resident).await.unwrap();

        let package = Package {
            id: Default::default(),
            quantity: 1,
            resident_id: resident.id.clone(),
            description: "".into(),
            status: PackageStatus::Pending,
            delivered_to_id: None,
            received_at: ctx.sys.now(),
            delivered_at: None,
        };
        ctx.repos.packages.insert(&package).await.unwrap();

        let mut usecase = MarkPackageDeliveredUseCase {
            package_id: package.id.clone(),
            delivered_to_id: None,
        };
        let delivered = usecase.execute(&ctx).await.unwrap();

        assert_eq!(delivered.status, PackageStatus::Delivered);
        assert!(delivered.delivered_at.is_some());
    }
}
