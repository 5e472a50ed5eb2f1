mod category;
mod item;
mod reference;

pub use category::{Category, CategoryKind};
pub use item::{DisplayPrice, Ingredient, Item, ItemStatus, Variant};
pub use reference::{Allergen, ManagedIngredient, QuickTag, SideDish, StockStatus};
