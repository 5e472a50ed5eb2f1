// src/entity/reference.rs
//! Global reference data that items point at by id (or copy, for tags).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "IN_STOCK"),
            StockStatus::OutOfStock => write!(f, "OUT_OF_STOCK"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "IN_STOCK" => Ok(StockStatus::InStock),
            "OUT_OF_STOCK" => Ok(StockStatus::OutOfStock),
            _ => Err(format!("Invalid stock status: {}", s)),
        }
    }
}

/// Stock-tracked ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedIngredient {
    pub id: String,
    pub name: String,
    pub status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideDish {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergen {
    pub id: u32,
    pub name: String,
}

/// Colored label. Assigning a tag copies it onto the item, so later edits
/// to the registry entry do not reach already-tagged items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickTag {
    pub id: String,
    pub name: String,
    pub color: String,
}
