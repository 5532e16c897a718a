use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageStatus {
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "ENTREGUE")]
    Delivered,
    #[serde(rename = "EXTRAVIADO")]
    Lost,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDENTE",
            Self::Delivered => "ENTREGUE",
            Self::Lost => "EXTRAVIADO",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Pending, Self::Delivered, Self::Lost]
    }
}

impl FromStr for PackageStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDENTE" => Ok(Self::Pending),
            "ENTREGUE" => Ok(Self::Delivered),
            "EXTRAVIADO" => Ok(Self::Lost),
            _ => Err(anyhow::Error::msg(format!("Invalid package status: {}", s))),
        }
    }
}

impl Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parcel received at the front desk on behalf of a resident.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub id: ID,
    pub quantity: i32,
    pub resident_id: ID,
    pub description: String,
    pub status: PackageStatus,
    /// Resident the package was handed over to, which may differ from
    /// the addressee.
    pub delivered_to_id: Option<ID>,
    pub received_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Entity for Package {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
