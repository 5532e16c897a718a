use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryType {
    #[serde(rename = "CARRO")]
    Car,
    #[serde(rename = "MOTO")]
    Bike,
    #[serde(rename = "BICICLETA")]
    Bicycle,
    #[serde(rename = "SCOOTER")]
    Scooter,
    #[serde(rename = "PET")]
    Pet,
}

impl InventoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "CARRO",
            Self::Bike => "MOTO",
            Self::Bicycle => "BICICLETA",
            Self::Scooter => "SCOOTER",
            Self::Pet => "PET",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Car, Self::Bike, Self::Bicycle, Self::Scooter, Self::Pet]
    }
}

impl FromStr for InventoryType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CARRO" => Ok(Self::Car),
            "MOTO" => Ok(Self::Bike),
            "BICICLETA" => Ok(Self::Bicycle),
            "SCOOTER" => Ok(Self::Scooter),
            "PET" => Ok(Self::Pet),
            _ => Err(anyhow::Error::msg(format!("Invalid inventory type: {}", s))),
        }
    }
}

impl Display for InventoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered belonging of a resident: vehicles and pets.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub owner_id: ID,
    pub last_updated: DateTime<Utc>,
    pub inventory_type: InventoryType,
}

impl Entity for InventoryItem {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
