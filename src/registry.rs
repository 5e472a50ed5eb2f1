//! Global reference registries: side dishes, allergens, quick tags and
//! stock-managed ingredients.
//!
//! Items point into these by id. The registries are owned by the board and
//! lent out read-only; the only write path is `add_side_dish`.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::entity::{Allergen, ManagedIngredient, QuickTag, SideDish};
use crate::error::{MenuError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registries {
    #[serde(default)]
    pub side_dishes: Vec<SideDish>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    #[serde(default)]
    pub tags: Vec<QuickTag>,
    #[serde(default)]
    pub managed_ingredients: Vec<ManagedIngredient>,
}

impl Registries {
    pub fn side_dish(&self, id: &str) -> Option<&SideDish> {
        self.side_dishes.iter().find(|s| s.id == id)
    }

    pub fn allergen(&self, id: u32) -> Option<&Allergen> {
        self.allergens.iter().find(|a| a.id == id)
    }

    pub fn tag(&self, id: &str) -> Option<&QuickTag> {
        self.tags.iter().find(|t| t.id == id)
    }

    pub fn managed_ingredient(&self, id: &str) -> Option<&ManagedIngredient> {
        self.managed_ingredients.iter().find(|m| m.id == id)
    }

    /// Append a new side dish and return it.
    ///
    /// The id is `sd-` followed by a v4 UUID, unique for the session.
    pub fn add_side_dish(&mut self, name: &str, price: f64) -> Result<SideDish> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MenuError::EmptyName);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(MenuError::InvalidPrice(price.to_string()));
        }

        let side_dish = SideDish {
            id: format!("sd-{}", Uuid::new_v4()),
            name: name.to_string(),
            price,
        };
        info!(id = %side_dish.id, name = %side_dish.name, price, "side dish added");
        self.side_dishes.push(side_dish.clone());
        Ok(side_dish)
    }
}

/// Parse a user-typed price. Rejects non-numeric, non-finite and negative
/// input.
pub fn parse_price(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(MenuError::InvalidPrice(trimmed.to_string())),
    }
}
