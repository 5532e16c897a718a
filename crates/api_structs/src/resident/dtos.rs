use portarius_domain::{Resident, ResidentType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResidentDTO {
    pub id: ID,
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub apartment: String,
    pub block: String,
    pub resident_type: ResidentType,
}

impl ResidentDTO {
    pub fn new(resident: Resident) -> Self {
        Self {
            id: resident.id,
            name: resident.name,
            document: resident.document,
            email: resident.email,
            phone: resident.phone,
            apartment: resident.apartment,
            block: resident.block,
            resident_type: resident.resident_type,
        }
    }
}
