use super::IResidentRepo;
use portarius_domain::{Resident, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresResidentRepo {
    pool: PgPool,
}

impl PostgresResidentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ResidentRaw {
    resident_uid: Uuid,
    name: String,
    document: String,
    email: String,
    phone: String,
    apartment: String,
    block: String,
    resident_type: String,
}

impl TryFrom<ResidentRaw> for Resident {
    type Error = anyhow::Error;

    fn try_from(raw: ResidentRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.resident_uid.into(),
            name: raw.name,
            document: raw.document,
            email: raw.email,
            phone: raw.phone,
            apartment: raw.apartment,
            block: raw.block,
            resident_type: raw.resident_type.parse()?,
        })
    }
}

#[async_trait::async_trait]
impl IResidentRepo for PostgresResidentRepo {
    async fn insert(&self, resident: &Resident) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO residents
            (resident_uid, name, document, email, phone, apartment, block, resident_type)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(resident.id.inner_ref())
        .bind(&resident.name)
        .bind(&resident.document)
        .bind(&resident.email)
        .bind(&resident.phone)
        .bind(&resident.apartment)
        .bind(&resident.block)
        .bind(resident.resident_type.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, resident: &Resident) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE residents SET
                name = $2,
                document = $3,
                email = $4,
                phone = $5,
                apartment = $6,
                block = $7,
                resident_type = $8
            WHERE resident_uid = $1
            "#,
        )
        .bind(resident.id.inner_ref())
        .bind(&resident.name)
        .bind(&resident.document)
        .bind(&resident.email)
        .bind(&resident.phone)
        .bind(&resident.apartment)
        .bind(&resident.block)
        .bind(resident.resident_type.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, resident_id: &ID) -> Option<Resident> {
        let res = sqlx::query_as::<_, ResidentRaw>(
            r#"
            SELECT * FROM residents
            WHERE resident_uid = $1
            "#,
        )
        .bind(resident_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Resident::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to find resident {}: {:?}", resident_id, e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Resident>> {
        sqlx::query_as::<_, ResidentRaw>(
            r#"
            SELECT * FROM residents
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Resident::try_from)
        .collect()
    }

    async fn delete(&self, resident_id: &ID) -> Option<Resident> {
        let res = sqlx::query_as::<_, ResidentRaw>(
            r#"
            DELETE FROM residents
            WHERE resident_uid = $1
            RETURNING *
            "#,
        )
        .bind(resident_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| Resident::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to delete resident {}: {:?}", resident_id, e);
                None
            }
        }
    }
}
