use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidentType {
    #[serde(rename = "INQUILINO")]
    Tenant,
    #[serde(rename = "PROPRIETARIO")]
    Owner,
    #[serde(rename = "KRUM")]
    Krum,
    #[serde(rename = "NAO_RESIDENTE")]
    NotResident,
}

impl ResidentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "INQUILINO",
            Self::Owner => "PROPRIETARIO",
            Self::Krum => "KRUM",
            Self::NotResident => "NAO_RESIDENTE",
        }
    }
}

impl FromStr for ResidentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INQUILINO" => Ok(Self::Tenant),
            "PROPRIETARIO" => Ok(Self::Owner),
            "KRUM" => Ok(Self::Krum),
            "NAO_RESIDENTE" => Ok(Self::NotResident),
            _ => Err(anyhow::Error::msg(format!("Invalid resident type: {}", s))),
        }
    }
}

impl Display for ResidentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Someone living in (or otherwise attached to) the building. The
/// phone number is what the reminder subsystem resolves when a package
/// or reservation event arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct Resident {
    pub id: ID,
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub apartment: String,
    pub block: String,
    pub resident_type: ResidentType,
}

impl Entity for Resident {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
