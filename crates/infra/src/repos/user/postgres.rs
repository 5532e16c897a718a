use super::IUserRepo;
use portarius_domain::{User, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    name: String,
    email: String,
    password_digest: String,
    role: String,
}

impl TryFrom<UserRaw> for User {
    type Error = anyhow::Error;

    fn try_from(raw: UserRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.user_uid.into(),
            name: raw.name,
            email: raw.email,
            password_digest: raw.password_digest,
            role: raw.role.parse()?,
        })
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users
            (user_uid, name, email, password_digest, role)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_digest)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                email = $3,
                password_digest = $4,
                role = $5
            WHERE user_uid = $1
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_digest)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let res = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| User::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to find user {}: {:?}", user_id, e);
                None
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        let res = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| User::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to find user by email: {:?}", e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(User::try_from)
        .collect()
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        let res = sqlx::query_as::<_, UserRaw>(
            r#"
            DELETE FROM users
            WHERE user_uid = $1
            RETURNING *
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| User::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to delete user {}: {:?}", user_id, e);
                None
            }
        }
    }
}
