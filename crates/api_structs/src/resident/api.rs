use crate::dtos::ResidentDTO;
use portarius_domain::{Resident, ResidentType, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentResponse {
    pub resident: ResidentDTO,
}

impl ResidentResponse {
    pub fn new(resident: Resident) -> Self {
        Self {
            resident: ResidentDTO::new(resident),
        }
    }
}

pub mod create_resident {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub document: String,
        pub email: String,
        pub phone: String,
        pub apartment: String,
        pub block: String,
        pub resident_type: Option<ResidentType>,
    }

    pub type APIResponse = ResidentResponse;
}

pub mod get_resident {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub resident_id: ID,
    }

    pub type APIResponse = ResidentResponse;
}

pub mod get_residents {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub residents: Vec<ResidentDTO>,
    }

    impl APIResponse {
        pub fn new(residents: Vec<Resident>) -> Self {
            Self {
                residents: residents.into_iter().map(ResidentDTO::new).collect(),
            }
        }
    }
}

pub mod update_resident {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub resident_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub document: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub apartment: Option<String>,
        pub block: Option<String>,
        pub resident_type: Option<ResidentType>,
    }

    pub type APIResponse = ResidentResponse;
}

pub mod delete_resident {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub resident_id: ID,
    }

    pub type APIResponse = ResidentResponse;
}
