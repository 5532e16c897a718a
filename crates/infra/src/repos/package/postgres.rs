use super::IPackageRepo;
use chrono::{DateTime, Utc};
use portarius_domain::{Package, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresPackageRepo {
    pool: PgPool,
}

impl PostgresPackageRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PackageRaw {
    package_uid: Uuid,
    quantity: i32,
    resident_uid: Uuid,
    description: String,
    status: String,
    delivered_to_uid: Option<Uuid>,
    received_at: DateTime<Utc>,
    delivered_at: Option<DateTime<Utc>>,
}

impl TryFrom<PackageRaw> for Package {
    type Error = anyhow::Error;

    fn try_from(raw: PackageRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.package_uid.into(),
            quantity: raw.quantity,
            resident_id: raw.resident_uid.into(),
            description: raw.description,
            status: raw.status.parse()?,
            delivered_to_id: raw.delivered_to_uid.map(|uid| uid.into()),
            received_at: raw.received_at,
            delivered_at: raw.delivered_at,
        })
    }
}

#[async_trait::async_trait]
impl IPackageRepo for PostgresPackageRepo {
    async fn insert(&self, package: &Package) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO packages
            (package_uid, quantity, resident_uid, description, status, delivered_to_uid, received_at, delivered_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(package.id.inner_ref())
        .bind(package.quantity)
        .bind(package.resident_id.inner_ref())
        .bind(&package.description)
        .bind(package.status.as_str())
        .bind(package.delivered_to_id.as_ref().map(|id| *id.inner_ref()))
        .bind(package.received_at)
        .bind(package.delivered_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, package: &Package) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE packages SET
                quantity = $2,
                resident_uid = $3,
                description = $4,
                status = $5,
                delivered_to_uid = $6,
                received_at = $7,
                delivered_at = $8
            WHERE package_uid = $1
            "#,
        )
        .bind(package.id.inner_ref())
        .bind(package.quantity)
        .bind(package.resident_id.inner_ref())
        .bind(&package.description)
        .bind(package.status.as_str())
        .bind(package.delivered_to_id.as_ref().map(|id| *id.inner_ref()))
        .bind(package.received_at)
        .bind(package.delivered_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, package_id: &ID) -> Option<Package> {
        let res = sqlx::query_as::<_, PackageRaw>(
            r#"
            SELECT * FROM packages
            WHERE package_uid = $1
            "#,
        )
        .bind(package_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Package::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to find package {}: {:?}", package_id, e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Package>> {
        sqlx::query_as::<_, PackageRaw>(
            r#"
            SELECT * FROM packages
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Package::try_from)
        .collect()
    }

    async fn delete(&self, package_id: &ID) -> Option<Package> {
        let res = sqlx::query_as::<_, PackageRaw>(
            r#"
            DELETE FROM packages
            WHERE package_uid = $1
            RETURNING *
            "#,
        )
        .bind(package_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Package::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to delete package {}: {:?}", package_id, e);
                None
            }
        }
    }
}
