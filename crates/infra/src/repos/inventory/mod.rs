mod inmemory;
mod postgres;

pub use inmemory::InMemoryInventoryRepo;
pub use postgres::PostgresInventoryRepo;

use portarius_domain::{InventoryItem, ID};

#[async_trait::async_trait]
pub trait IInventoryRepo: Send + Sync {
    async fn insert(&self, item: &InventoryItem) -> anyhow::Result<()>;
    async fn save(&self, item: &InventoryItem) -> anyhow::Result<()>;
    async fn find(&self, item_id: &ID) -> Option<InventoryItem>;
    async fn find_all(&self) -> anyhow::Result<Vec<InventoryItem>>;
    async fn delete(&self, item_id: &ID) -> Option<InventoryItem>;
}
