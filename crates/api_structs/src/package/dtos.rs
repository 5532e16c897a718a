use chrono::{DateTime, Utc};
use portarius_domain::{Package, PackageStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PackageDTO {
    pub id: ID,
    pub quantity: i32,
    pub resident_id: ID,
    pub description: String,
    pub status: PackageStatus,
    pub delivered_to_id: Option<ID>,
    pub received_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl PackageDTO {
    pub fn new(package: Package) -> Self {
        Self {
            id: package.id,
            quantity: package.quantity,
            resident_id: package.resident_id,
            description: package.description,
            status: package.status,
            delivered_to_id: package.delivered_to_id,
            received_at: package.received_at,
            delivered_at: package.delivered_at,
        }
    }
}
