use super::IInventoryRepo;
use chrono::{DateTime, Utc};
use portarius_domain::{InventoryItem, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresInventoryRepo {
    pool: PgPool,
}

impl PostgresInventoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InventoryItemRaw {
    inventory_uid: Uuid,
    name: String,
    description: String,
    quantity: i32,
    owner_uid: Uuid,
    last_updated: DateTime<Utc>,
    inventory_type: String,
}

impl TryFrom<InventoryItemRaw> for InventoryItem {
    type Error = anyhow::Error;

    fn try_from(raw: InventoryItemRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.inventory_uid.into(),
            name: raw.name,
            description: raw.description,
            quantity: raw.quantity,
            owner_id: raw.owner_uid.into(),
            last_updated: raw.last_updated,
            inventory_type: raw.inventory_type.parse()?,
        })
    }
}

#[async_trait::async_trait]
impl IInventoryRepo for PostgresInventoryRepo {
    async fn insert(&self, item: &InventoryItem) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO inventory_items
            (inventory_uid, name, description, quantity, owner_uid, last_updated, inventory_type)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.id.inner_ref())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.quantity)
        .bind(item.owner_id.inner_ref())
        .bind(item.last_updated)
        .bind(item.inventory_type.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, item: &InventoryItem) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE inventory_items SET
                name = $2,
                description = $3,
                quantity = $4,
                owner_uid = $5,
                last_updated = $6,
                inventory_type = $7
            WHERE inventory_uid = $1
            "#,
        )
        .bind(item.id.inner_ref())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.quantity)
        .bind(item.owner_id.inner_ref())
        .bind(item.last_updated)
        .bind(item.inventory_type.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, item_id: &ID) -> Option<InventoryItem> {
        let res = sqlx::query_as::<_, InventoryItemRaw>(
            r#"
            SELECT * FROM inventory_items
            WHERE inventory_uid = $1
            "#,
        )
        .bind(item_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| InventoryItem::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to find inventory item {}: {:?}", item_id, e);
                None
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<InventoryItem>> {
        sqlx::query_as::<_, InventoryItemRaw>(
            r#"
            SELECT * FROM inventory_items
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(InventoryItem::try_from)
        .collect()
    }

    async fn delete(&self, item_id: &ID) -> Option<InventoryItem> {
        let res = sqlx::query_as::<_, InventoryItemRaw>(
            r#"
            DELETE FROM inventory_items
            WHERE inventory_uid = $1
            RETURNING *
            "#,
        )
        .bind(item_id.inner_ref())
        .fetch_optional(&self.pool)
        .await;

        match res {
            Ok(raw) => raw.and_then(|raw| InventoryItem::try_from(raw).ok()),
            Err(e) => {
                error!("Unable to delete inventory item {}: {:?}", item_id, e);
                None
            }
        }
    }
}
