use crate::error::PortariusError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use portarius_api_structs::update_resident::*;
use portarius_domain::{Resident, ResidentType, ID};
use portarius_infra::PortariusContext;

pub async fn update_resident_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateResidentUseCase {
        resident_id: path_params.resident_id.clone(),
        name: body.name,
        document: body.document,
        email: body.email,
        phone: body.phone,
        apartment: body.apartment,
        block: body.block,
        resident_type: body.resident_type,
    };

    execute(usecase, &ctx)
        .await
        .map(|resident| HttpResponse::Ok().json(APIResponse::new(resident)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct UpdateResidentUseCase {
    pub resident_id: ID,
    pub name: Option<String>,
    pub document: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub apartment: Option<String>,
    pub block: Option<String>,
    pub resident_type: Option<ResidentType>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(resident_id) => Self::NotFound(format!(
                "The resident with id: {}, was not found.",
                resident_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateResidentUseCase {
    type Response = Resident;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateResident";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let mut resident = match ctx.repos.residents.find(&self.resident_id).await {
            Some(resident) => resident,
            None => return Err(UseCaseError::NotFound(self.resident_id.clone())),
        };

        if let Some(name) = &self.name {
            resident.name = name.clone();
        }
        if let Some(document) = &self.document {
            resident.document = document.clone();
        }
        if let Some(email) = &self.email {
            resident.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            resident.phone = phone.clone();
        }
        if let Some(apartment) = &self.apartment {
            resident.apartment = apartment.clone();
        }
        if let Some(block) = &self.block {
            resident.block = block.clone();
        }
        if let Some(resident_type) = self.resident_type {
            resident.resident_type = resident_type;
        }

        ctx.repos
            .residents
            .save(&resident)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(resident)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::resident::create_resident::CreateResidentUseCase;
    use portarius_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn updates_only_the_given_fields() {
        let ctx = setup_context_inmemory();
        let mut create = CreateResidentUseCase {
            name: "Maria".into(),
            document: "123".into(),
            email: "maria@example.com".into(),
            phone: "11999999999".into(),
            apartment: "12".into(),
            block: "A".into(),
            resident_type: ResidentType::Tenant,
        };
        let resident = create.execute(&ctx).await.unwrap();

        let mut usecase = UpdateResidentUseCase {
            resident_id: resident.id.clone(),
            name: None,
            document: None,
            email: None,
            phone: Some("11888888888".into()),
            apartment: None,
            block: None,
            resident_type: None,
        };
        let updated = usecase.execute(&ctx).await.unwrap();

        assert_eq!(updated.phone, "11888888888");
        assert_eq!(updated.name, "Maria");
        assert_eq!(
            ctx.repos.residents.find(&resident.id).await.unwrap().phone,
            "11888888888"
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_resident() {
        let ctx = setup_context_inmemory();
        let mut usecase = UpdateResidentUseCase {
            resident_id: ID::new(),
            name: None,
            document: None,
            email: None,
            phone: None,
            apartment: None,
            block: None,
            resident_type: None,
        };

        let res = usecase.execute(&ctx).await;
        assert!(res.is_err());
    }
}
