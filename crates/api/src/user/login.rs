use crate::error::PortariusError;
use crate::shared::auth::{create_token, verify_password};
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use portarius_api_structs::login::*;
use portarius_domain::User;
use portarius_infra::PortariusContext;

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PortariusContext>,
) -> Result<HttpResponse, PortariusError> {
    let body = body.0;
    let usecase = LoginUseCase {
        email: body.email,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|(token, user)| HttpResponse::Ok().json(APIResponse::new(token, user)))
        .map_err(PortariusError::from)
}

#[derive(Debug)]
pub struct LoginUseCase {
    pub email: String,
    pub password: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidCredentials,
    InternalError,
}

impl From<UseCaseError> for PortariusError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials => {
                Self::Unauthorized("Invalid email or password".into())
            }
            UseCaseError::InternalError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = (String, User);

    type Error = UseCaseError;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &PortariusContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx.repos.users.find_by_email(&self.email).await {
            Some(user) => user,
            None => return Err(UseCaseError::InvalidCredentials),
        };

        if !verify_password(&self.password, &user.password_digest) {
            return Err(UseCaseError::InvalidCredentials);
        }

        let token = create_token(&user, &ctx.config.jwt_secret, ctx.sys.now())
            .map_err(|_| UseCaseError::InternalError)?;

        Ok((token, user))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::user::register::RegisterUserUseCase;
    use portarius_infra::setup_context_inmemory;

    async fn setup() -> PortariusContext {
        let ctx = setup_context_inmemory();
        let mut register = RegisterUserUseCase {
            name: "Porter".into(),
            email: "porter@example.com".into(),
            password: "hunter2".into(),
        };
        register.execute(&ctx).await.unwrap();
        ctx
    }

    #[actix_web::main]
    #[test]
    async fn issues_a_token_for_valid_credentials() {
        let ctx = setup().await;
        let mut usecase = LoginUseCase {
            email: "porter@example.com".into(),
            password: "hunter2".into(),
        };

        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());
        let (token, user) = res.unwrap();
        assert!(!token.is_empty());
        assert_eq!(user.email, "porter@example.com");
    }

    #[actix_web::main]
    #[test]
    async fn rejects_wrong_password() {
        let ctx = setup().await;
        let mut usecase = LoginUseCase {
            email: "porter@example.com".into(),
            password: "wrong".into(),
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidCredentials);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_email() {
        let ctx = setup().await;
        let mut usecase = LoginUseCase {
            email: "nobody@example.com".into(),
            password: "hunter2".into(),
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidCredentials);
    }
}
