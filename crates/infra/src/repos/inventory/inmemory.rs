use super::IInventoryRepo;
use crate::repos::shared::inmemory_repo::*;
use portarius_domain::{InventoryItem, ID};

pub struct InMemoryInventoryRepo {
    items: std::sync::Mutex<Vec<InventoryItem>>,
}

impl InMemoryInventoryRepo {
    pub fn new() -> Self {
        Self {
            items: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IInventoryRepo for InMemoryInventoryRepo {
    async fn insert(&self, item: &InventoryItem) -> anyhow::Result<()> {
        insert(item, &self.items);
        Ok(())
    }

    async fn save(&self, item: &InventoryItem) -> anyhow::Result<()> {
        save(item, &self.items);
        Ok(())
    }

    async fn find(&self, item_id: &ID) -> Option<InventoryItem> {
        find(item_id, &self.items)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<InventoryItem>> {
        Ok(find_all(&self.items))
    }

    async fn delete(&self, item_id: &ID) -> Option<InventoryItem> {
        delete(item_id, &self.items)
    }
}
