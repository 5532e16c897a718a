use crate::error::PortariusError;
use crate::shared::auth::hash_password;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use portarius_api_structs::register::*;
use portarius_domain::{User, UserRole};
use portarius_infra::PortariusContext;

pub async fn register_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    let body = body.0;
    let usecase = RegisterUserUseCase {
        name: body.name,
        email: body.email,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Created().json(APIResponse::new(user)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct RegisterUserUseCase {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmailTaken(String),
    StorageError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmailTaken(email) => {
                Self::Conflict(format!("A user with email: {}, already exists.", email))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "RegisterUser";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.users.find_by_email(&self.email).await.is_some() {
            return Err(UseCaseError::EmailTaken(self.email.clone()));
        }

        let user = User {
            id: Default::default(),
            name: self.name.clone(),
            email: self.email.clone(),
            password_digest: hash_password(&self.password),
            role: UserRole::User,
        };

        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(user)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use portarius_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn registers_a_user() {
        let ctx = setup_context_inmemory();
        let mut usecase = RegisterUserUseCase {
            name: "Porter".into(),
            email: "porter@example.com".into(),
            password: "hunter2".into(),
        };

        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());
        let user = res.unwrap();
        assert_ne!(user.password_digest, "hunter2");
    }

    #[actix_web::main]
    #[test]
    async fn rejects_duplicate_emails() {
        let ctx = setup_context_inmemory();
        let mut usecase = RegisterUserUseCase {
            name: "Porter".into(),
            email: "porter@example.com".into(),
            password: "hunter2".into(),
        };
        usecase.execute(&ctx).await.unwrap();

        let mut duplicate = RegisterUserUseCase {
            name: "Other porter".into(),
            email: "porter@example.com".into(),
            password: "hunter3".into(),
        };
        let res = duplicate.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::EmailTaken("porter@example.com".into())
        );
    }
}
