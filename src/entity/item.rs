// src/entity/item.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::QuickTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Available,
    SoldOut,
    Hidden,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Available, ItemStatus::SoldOut, ItemStatus::Hidden];

    /// Human-readable label used by the list and staff views
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Available => "Available",
            ItemStatus::SoldOut => "Sold out",
            ItemStatus::Hidden => "Hidden",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "AVAILABLE"),
            ItemStatus::SoldOut => write!(f, "SOLD_OUT"),
            ItemStatus::Hidden => write!(f, "HIDDEN"),
        }
    }
}

// Exact match only: bulk status input outside the three codes is rejected.
impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(ItemStatus::Available),
            "SOLD_OUT" => Ok(ItemStatus::SoldOut),
            "HIDDEN" => Ok(ItemStatus::Hidden),
            _ => Err(format!("Invalid item status: {}", s)),
        }
    }
}

/// A priced size or option that replaces the base price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Variant {
    pub fn blank() -> Self {
        Self {
            id: format!("var-{}", Uuid::new_v4()),
            name: String::new(),
            price: 0.0,
        }
    }
}

/// Item-local paid add-on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Ingredient {
    pub fn blank() -> Self {
        Self {
            id: format!("ing-{}", Uuid::new_v4()),
            name: String::new(),
            price: 0.0,
        }
    }
}

/// Price shown for an item: variants supersede the base price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayPrice {
    Base(f64),
    Range { min: f64, max: f64 },
}

impl std::fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayPrice::Base(price) => write!(f, "{}", price),
            DisplayPrice::Range { min, max } if min == max => write!(f, "{}", min),
            DisplayPrice::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_price: f64,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Free-text ingredients, not stock tracked
    #[serde(default)]
    pub base_ingredients: Vec<String>,
    /// References into the managed ingredient registry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managed_ingredient_ids: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// References into the side dish registry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub side_dish_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergen_ids: Vec<u32>,
    /// Copies of the global tags taken at assignment time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<QuickTag>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            base_price,
            status: ItemStatus::default(),
            icon: None,
            image_url: None,
            variants: Vec::new(),
            base_ingredients: Vec::new(),
            managed_ingredient_ids: Vec::new(),
            ingredients: Vec::new(),
            side_dish_ids: Vec::new(),
            allergen_ids: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn display_price(&self) -> DisplayPrice {
        let mut prices = self.variants.iter().map(|v| v.price);
        match prices.next() {
            None => DisplayPrice::Base(self.base_price),
            Some(first) => {
                let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
                DisplayPrice::Range { min, max }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_exact() {
        assert_eq!("SOLD_OUT".parse::<ItemStatus>(), Ok(ItemStatus::SoldOut));
        assert!("sold_out".parse::<ItemStatus>().is_err());
        assert!("CLOSED".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn test_status_display_roundtrips() {
        for status in ItemStatus::ALL {
            assert_eq!(status.to_string().parse::<ItemStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_display_price_without_variants() {
        let item = Item::new("i1", "Soup", 65.0);
        assert_eq!(item.display_price(), DisplayPrice::Base(65.0));
        assert_eq!(item.display_price().to_string(), "65");
    }

    #[test]
    fn test_variants_supersede_base_price() {
        let mut item = Item::new("i1", "Pizza", 150.0);
        item.variants = vec![
            Variant { id: "v1".into(), name: "32cm".into(), price: 169.0 },
            Variant { id: "v2".into(), name: "45cm".into(), price: 239.0 },
        ];
        assert_eq!(item.display_price(), DisplayPrice::Range { min: 169.0, max: 239.0 });
        assert_eq!(item.display_price().to_string(), "169-239");
    }

    #[test]
    fn test_deserialize_seed_shape() {
        let json = r#"{
            "id": "i1",
            "name": "Margherita",
            "basePrice": 150,
            "status": "SOLD_OUT",
            "baseIngredients": ["tomato", "mozzarella"],
            "allergenIds": [1, 7]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, ItemStatus::SoldOut);
        assert_eq!(item.base_ingredients.len(), 2);
        assert_eq!(item.allergen_ids, vec![1, 7]);
        assert!(item.variants.is_empty());
        assert!(item.tags.is_empty());
    }
}
