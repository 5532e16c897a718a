use chrono::{DateTime, Utc};
use portarius_domain::{InventoryItem, InventoryType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDTO {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub owner_id: ID,
    pub last_updated: DateTime<Utc>,
    pub inventory_type: InventoryType,
}

impl InventoryItemDTO {
    pub fn new(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            quantity: item.quantity,
            owner_id: item.owner_id,
            last_updated: item.last_updated,
            inventory_type: item.inventory_type,
        }
    }
}
