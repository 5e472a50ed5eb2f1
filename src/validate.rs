//! Dataset consistency warnings.
//!
//! Nothing here is fatal: a menu with warnings still loads and works. These
//! point at data that the tree operations tolerate but that is probably a
//! mistake.

use std::collections::HashSet;
use std::sync::Arc;

use crate::entity::{Category, Item};
use crate::error::Result;
use crate::registry::Registries;
use crate::tree;

#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Two categories share an id; lookups resolve to the first in pre-order.
    DuplicateCategoryId { id: String },
    /// Two items share an id; saving one replaces both.
    DuplicateItemId { id: String },
    UnknownSideDish { item_id: String, side_dish_id: String },
    UnknownManagedIngredient { item_id: String, ingredient_id: String },
    UnknownAllergen { item_id: String, allergen_id: u32 },
    NegativePrice { item_id: String, field: String, price: f64 },
}

fn check_item(item: &Item, registries: &Registries, warnings: &mut Vec<Warning>) {
    for id in &item.side_dish_ids {
        if registries.side_dish(id).is_none() {
            warnings.push(Warning::UnknownSideDish {
                item_id: item.id.clone(),
                side_dish_id: id.clone(),
            });
        }
    }
    for id in &item.managed_ingredient_ids {
        if registries.managed_ingredient(id).is_none() {
            warnings.push(Warning::UnknownManagedIngredient {
                item_id: item.id.clone(),
                ingredient_id: id.clone(),
            });
        }
    }
    for &id in &item.allergen_ids {
        if registries.allergen(id).is_none() {
            warnings.push(Warning::UnknownAllergen {
                item_id: item.id.clone(),
                allergen_id: id,
            });
        }
    }

    let prices = std::iter::once(("basePrice".to_string(), item.base_price))
        .chain(item.variants.iter().map(|v| (format!("variant {}", v.id), v.price)))
        .chain(item.ingredients.iter().map(|i| (format!("ingredient {}", i.id), i.price)));
    for (field, price) in prices {
        if price < 0.0 {
            warnings.push(Warning::NegativePrice {
                item_id: item.id.clone(),
                field,
                price,
            });
        }
    }
}

/// Check a forest against its registries.
pub fn check_dataset(categories: &[Arc<Category>], registries: &Registries) -> Result<Vec<Warning>> {
    let mut warnings = Vec::new();
    let mut category_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for (category, _) in tree::flatten(categories)? {
        if !category_ids.insert(category.id.clone()) {
            warnings.push(Warning::DuplicateCategoryId { id: category.id.clone() });
        }
        for item in &category.items {
            if !item_ids.insert(item.id.clone()) {
                warnings.push(Warning::DuplicateItemId { id: item.id.clone() });
            }
            check_item(item, registries, &mut warnings);
        }
    }

    Ok(warnings)
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::DuplicateCategoryId { id } => {
            format!("Warning: category id '{}' is used more than once", id)
        }
        Warning::DuplicateItemId { id } => {
            format!("Warning: item id '{}' is used more than once", id)
        }
        Warning::UnknownSideDish { item_id, side_dish_id } => {
            format!("Warning: item '{}' references unknown side dish '{}'", item_id, side_dish_id)
        }
        Warning::UnknownManagedIngredient { item_id, ingredient_id } => {
            format!(
                "Warning: item '{}' references unknown managed ingredient '{}'",
                item_id, ingredient_id
            )
        }
        Warning::UnknownAllergen { item_id, allergen_id } => {
            format!("Warning: item '{}' references unknown allergen {}", item_id, allergen_id)
        }
        Warning::NegativePrice { item_id, field, price } => {
            format!("Warning: item '{}' has negative {} ({})", item_id, field, price)
        }
    }
}
