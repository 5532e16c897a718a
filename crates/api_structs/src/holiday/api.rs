use portarius_domain::Holiday;
use serde::{Deserialize, Serialize};

pub mod get_holidays {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub year: i32,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub holidays: Vec<Holiday>,
    }

    impl APIResponse {
        pub fn new(holidays: Vec<Holiday>) -> Self {
            Self { holidays }
        }
    }
}
