use crate::dtos::PackageDTO;
use portarius_domain::{Package, PackageStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub package: PackageDTO,
}

impl PackageResponse {
    pub fn new(package: Package) -> Self {
        Self {
            package: PackageDTO::new(package),
        }
    }
}

pub mod create_package {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub quantity: Option<i32>,
        pub resident_id: ID,
        pub description: Option<String>,
        pub status: Option<PackageStatus>,
        pub delivered_to_id: Option<ID>,
    }

    pub type APIResponse = PackageResponse;
}

pub mod get_package {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub package_id: ID,
    }

    pub type APIResponse = PackageResponse;
}

pub mod get_packages {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub packages: Vec<PackageDTO>,
    }

    impl APIResponse {
        pub fn new(packages: Vec<Package>) -> Self {
            Self {
                packages: packages.into_iter().map(PackageDTO::new).collect(),
            }
        }
    }
}

pub mod update_package {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub package_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub quantity: Option<i32>,
        pub resident_id: Option<ID>,
        pub description: Option<String>,
        pub status: Option<PackageStatus>,
        pub delivered_to_id: Option<ID>,
    }

    pub type APIResponse = PackageResponse;
}

pub mod delete_package {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub package_id: ID,
    }

    pub type APIResponse = PackageResponse;
}

pub mod mark_package_delivered {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub package_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub delivered_to_id: Option<ID>,
    }

    pub type APIResponse = PackageResponse;
}

pub mod mark_package_lost {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub package_id: ID,
    }

    pub type APIResponse = PackageResponse;
}

pub mod get_package_statuses {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub statuses: Vec<PackageStatus>,
    }

    impl APIResponse {
        pub fn new(statuses: Vec<PackageStatus>) -> Self {
            Self { statuses }
        }
    }
}
