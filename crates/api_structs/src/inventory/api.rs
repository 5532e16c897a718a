use crate::dtos::InventoryItemDTO;
use portarius_domain::{InventoryItem, InventoryType, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemResponse {
    pub item: InventoryItemDTO,
}

impl InventoryItemResponse {
    pub fn new(item: InventoryItem) -> Self {
        Self {
            item: InventoryItemDTO::new(item),
        }
    }
}

pub mod create_inventory_item {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub description: Option<String>,
        pub quantity: i32,
        pub owner_id: ID,
        pub inventory_type: InventoryType,
    }

    pub type APIResponse = InventoryItemResponse;
}

pub mod get_inventory_item {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub item_id: ID,
    }

    pub type APIResponse = InventoryItemResponse;
}

pub mod get_inventory_items {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub items: Vec<InventoryItemDTO>,
    }

    impl APIResponse {
        pub fn new(items: Vec<InventoryItem>) -> Self {
            Self {
                items: items.into_iter().map(InventoryItemDTO::new).collect(),
            }
        }
    }
}

pub mod update_inventory_item {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub item_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub description: Option<String>,
        pub quantity: Option<i32>,
        pub owner_id: Option<ID>,
        pub inventory_type: Option<InventoryType>,
    }

    pub type APIResponse = InventoryItemResponse;
}

pub mod delete_inventory_item {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub item_id: ID,
    }

    pub type APIResponse = InventoryItemResponse;
}

pub mod get_inventory_types {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub types: Vec<InventoryType>,
    }

    impl APIResponse {
        pub fn new(types: Vec<InventoryType>) -> Self {
            Self { types }
        }
    }
}
