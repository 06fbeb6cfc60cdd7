use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {dimension} token: `{token}`")]
pub struct UnknownToken {
    pub dimension: &'static str,
    pub token: String,
}

/// Fuel types carried in the catalog. Storage tokens are the normalized
/// (accent-free) pt-BR words; display names carry the accents back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Flex,
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn storage_token(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::Gasoline => "gasolina",
            Self::Diesel => "diesel",
            Self::Electric => "eletrico",
            Self::Hybrid => "hibrido",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Flex => "Flex",
            Self::Gasoline => "Gasolina",
            Self::Diesel => "Diesel",
            Self::Electric => "Elétrico",
            Self::Hybrid => "Híbrido",
        }
    }
}

impl FromStr for FuelType {
    type Err = UnknownToken;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flex" => Ok(Self::Flex),
            "gasolina" => Ok(Self::Gasoline),
            "diesel" => Ok(Self::Diesel),
            "eletrico" => Ok(Self::Electric),
            "hibrido" => Ok(Self::Hybrid),
            other => Err(UnknownToken { dimension: "fuel", token: other.to_string() }),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    pub fn storage_token(self) -> &'static str {
        match self {
            Self::Automatic => "automatico",
            Self::Manual => "manual",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Automatic => "Automático",
            Self::Manual => "Manual",
        }
    }
}

impl FromStr for Transmission {
    type Err = UnknownToken;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "automatico" => Ok(Self::Automatic),
            "manual" => Ok(Self::Manual),
            other => Err(UnknownToken { dimension: "transmission", token: other.to_string() }),
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One inventory record as the catalog stores it. The core never mutates
/// these; it only filters and formats them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: Decimal,
    pub mileage: i64,
    pub is_new: bool,
    pub docs_clear: bool,
    pub damaged: bool,
    pub vin: String,
    pub fuel: FuelType,
    pub doors: u8,
    pub transmission: Transmission,
}
