use super::subscribers::PublishPackageCreated;
use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::create_package::*;
use portarius_domain::{Package, PackageStatus, ID};
use portarius_infra::PortariusContext;

pub async fn create_package_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreatePackageUseCase {
        quantity: body.quantity.unwrap_or(1),
        resident_id: body.resident_id,
        description: body.description.unwrap_or_default(),
        status: body.status.unwrap_or(PackageStatus::Pending),
        delivered_to_id: body.delivered_to_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|package| HttpResponse::Created().json(APIResponse::new(package)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct CreatePackageUseCase {
    pub quantity: i32,
    pub resident_id: ID,
    pub description: String,
    pub status: PackageStatus,
    pub delivered_to_id: Option<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ResidentNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ResidentNotFound(resident_id) => Self::NotFound(format!(
                "The resident with id: {}, was not found.",
                resident_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreatePackageUseCase {
    type Response = Package;

    type Error = UseCaseError;

    const NAME: &'static str = "CreatePackage";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.residents.find(&self.resident_id).await.is_none() {
            return Err(UseCaseError::ResidentNotFound(self.resident_id.clone()));
        }

        let package = Package {
            id: Default::default(),
            quantity: self.quantity,
            resident_id: self.resident_id.clone(),
            description: self.description.clone(),
            status: self.status,
            delivered_to_id: self.delivered_to_id.clone(),
            received_at: ctx.sys.now(),
            delivered_at: None,
        };

        ctx.repos
            .packages
            .insert(&package)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(package)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishPackageCreated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use portarius_domain::{Resident, ResidentType};
    use portarius_infra::setup_context_inmemory;

    async fn insert_resident(ctx: &PortariusContext) -> Resident {
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
        resident
    }

    #[actix_web::main]
    #[test]
    async fn creates_a_package() {
        let ctx = setup_context_inmemory();
        let resident = insert_resident(&ctx).await;

        let mut usecase = CreatePackageUseCase {
            quantity: 2,
            resident_id: resident.id.clone(),
            description: "Two boxes".into(),
            status: PackageStatus::Pending,
            delivered_to_id: None,
        };

        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());
        let package = res.unwrap();
        assert_eq!(package.resident_id, resident.id);
        assert!(ctx.repos.packages.find(&package.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn creating_a_pending_package_triggers_exactly_one_reminder() {
        let ctx = setup_context_inmemory();
        crate::reminder::register_reminder_listeners(&ctx);
        let resident = insert_resident(&ctx).await;

        let usecase = CreatePackageUseCase {
            quantity: 1,
            resident_id: resident.id.clone(),
            description: "".into(),
            status: PackageStatus::Pending,
            delivered_to_id: None,
        };
        let package = execute(usecase, &ctx).await.unwrap();

        // The reminder is created on a spawned listener task
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let reminders = ctx.repos.reminders.find_all().await.unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].package_id, Some(package.id));
        assert_eq!(reminders[0].recipient, "11999999999");
    }

    #[actix_web::main]
    #[test]
    async fn delivered_packages_do_not_trigger_reminders() {
        let ctx = setup_context_inmemory();
        crate::reminder::register_reminder_listeners(&ctx);
        let resident = insert_resident(&ctx).await;

        let usecase = CreatePackageUseCase {
            quantity: 1,
            resident_id: resident.id.clone(),
            description: "".into(),
            status: PackageStatus::Delivered,
            delivered_to_id: None,
        };
        execute(usecase, &ctx).await.unwrap();

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_resident() {
        let ctx = setup_context_inmemory();
        let mut usecase = CreatePackageUseCase {
            quantity: 1,
            resident_id: ID::new(),
            description: "".into(),
            status: PackageStatus::Pending,
            delivered_to_id: None,
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::ResidentNotFound(usecase.resident_id)
        );
    }
}
