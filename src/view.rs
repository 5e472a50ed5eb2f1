//! Text rendering of the dashboard screens: category outline, breadcrumb,
//! item list and the staff read view.

use std::sync::Arc;

use serde::Serialize;

use crate::config::MenuConfig;
use crate::entity::{Category, Item, ItemStatus, StockStatus};
use crate::error::Result;
use crate::registry::Registries;
use crate::tree::{self, ItemGroup};

pub const BREADCRUMB_ROOT: &str = "Menu";
pub const NO_SELECTION: &str = "Please select a category.";
pub const EMPTY_CATEGORY: &str = "No items in this category.";
pub const EMPTY_SUBTREE: &str = "No items in this category or its subcategories.";

/// `Menu / Pizza / Classic`
pub fn render_breadcrumb(path: &[Arc<Category>]) -> String {
    std::iter::once(BREADCRUMB_ROOT)
        .chain(path.iter().map(|c| c.name.as_str()))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Indented outline of the whole forest.
pub fn render_tree(roots: &[Arc<Category>]) -> Result<String> {
    let mut out = String::new();
    for (category, depth) in tree::flatten(roots)? {
        let kind = category.kind.map(|k| format!(" [{}]", k)).unwrap_or_default();
        out.push_str(&format!(
            "{}- {}{} ({}) {} item{}\n",
            "  ".repeat(depth),
            category.name,
            kind,
            category.id,
            category.items.len(),
            if category.items.len() == 1 { "" } else { "s" },
        ));
    }
    Ok(out)
}

/// What the item list shows for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemListing<'a> {
    NoSelection,
    /// Category without subcategories: its own items
    Flat { title: String, items: &'a [Item] },
    /// Category with subcategories: items grouped by owning category
    Grouped { title: String, groups: Vec<ItemGroup<'a>> },
}

pub fn item_listing(category: Option<&Category>) -> Result<ItemListing<'_>> {
    let Some(category) = category else {
        return Ok(ItemListing::NoSelection);
    };

    let title = format!("Items in {}", category.name);
    if category.has_children() {
        Ok(ItemListing::Grouped {
            title,
            groups: tree::collect_item_groups(category)?,
        })
    } else {
        Ok(ItemListing::Flat {
            title,
            items: &category.items,
        })
    }
}

/// One item card as text. `selected` marks bulk selection.
pub fn render_item_card(item: &Item, registries: &Registries, config: &MenuConfig, selected: bool) -> String {
    let mut card = format!(
        "[{}] {} ({})  {}  {}",
        if selected { "x" } else { " " },
        item.name,
        item.id,
        config.format_price(item.display_price()),
        item.status.label(),
    );

    if !item.description.is_empty() {
        card.push_str(&format!("\n    {}", item.description));
    }

    let mut meta_parts = Vec::new();
    if !item.tags.is_empty() {
        let tags: Vec<&str> = item.tags.iter().map(|t| t.name.as_str()).collect();
        meta_parts.push(format!("Tags: {}", tags.join(", ")));
    }
    if !item.base_ingredients.is_empty() {
        meta_parts.push(format!("Ingredients: {}", item.base_ingredients.join(", ")));
    }
    if !item.variants.is_empty() {
        let variants: Vec<String> = item
            .variants
            .iter()
            .map(|v| format!("{} ({})", v.name, config.format_price(v.price)))
            .collect();
        meta_parts.push(format!("Variants: {}", variants.join(", ")));
    }
    if !item.side_dish_ids.is_empty() {
        let sides: Vec<&str> = item
            .side_dish_ids
            .iter()
            .map(|id| registries.side_dish(id).map_or(id.as_str(), |s| s.name.as_str()))
            .collect();
        meta_parts.push(format!("Sides: {}", sides.join(", ")));
    }
    if !item.allergen_ids.is_empty() {
        let ids: Vec<String> = item.allergen_ids.iter().map(u32::to_string).collect();
        meta_parts.push(format!("Allergens: {}", ids.join(", ")));
    }

    if !meta_parts.is_empty() {
        card.push_str(&format!("\n    {}", meta_parts.join(" | ")));
    }
    card
}

pub fn render_item_listing(
    listing: &ItemListing<'_>,
    registries: &Registries,
    config: &MenuConfig,
    bulk_selection: &[String],
) -> String {
    let card = |item: &Item| {
        let selected = bulk_selection.iter().any(|id| *id == item.id);
        render_item_card(item, registries, config, selected)
    };

    match listing {
        ItemListing::NoSelection => format!("{}\n", NO_SELECTION),
        ItemListing::Flat { title, items } => {
            let mut out = format!("{}\n\n", title);
            if items.is_empty() {
                out.push_str(EMPTY_CATEGORY);
                out.push('\n');
            }
            for item in items.iter() {
                out.push_str(&card(item));
                out.push('\n');
            }
            out
        }
        ItemListing::Grouped { title, groups } => {
            let mut out = format!("{}\n", title);
            if groups.is_empty() {
                out.push('\n');
                out.push_str(EMPTY_SUBTREE);
                out.push('\n');
            }
            for group in groups {
                out.push_str(&format!("\n## {}\n", group.category_name));
                for item in group.items {
                    out.push_str(&card(item));
                    out.push('\n');
                }
            }
            out
        }
    }
}

/// Format a single line of the staff view
fn format_staff_line(item: &Item, registries: &Registries, config: &MenuConfig) -> String {
    let mut line = format!("- **{}** {}", item.name, config.format_price(item.display_price()));

    match item.status {
        ItemStatus::SoldOut => line.push_str(" `[sold out]`"),
        ItemStatus::Hidden => line.push_str(" `[hidden]`"),
        ItemStatus::Available => {}
    }

    let out_of_stock: Vec<&str> = item
        .managed_ingredient_ids
        .iter()
        .filter_map(|id| registries.managed_ingredient(id))
        .filter(|m| m.status == StockStatus::OutOfStock)
        .map(|m| m.name.as_str())
        .collect();
    if !out_of_stock.is_empty() {
        line.push_str(&format!(" `[out of stock: {}]`", out_of_stock.join(", ")));
    }

    let mut meta_parts = Vec::new();

    if !item.variants.is_empty() {
        let variants: Vec<String> = item
            .variants
            .iter()
            .map(|v| format!("{} {}", v.name, config.format_price(v.price)))
            .collect();
        meta_parts.push(variants.join(", "));
    }

    if !item.side_dish_ids.is_empty() {
        let sides: Vec<&str> = item
            .side_dish_ids
            .iter()
            .filter_map(|id| registries.side_dish(id))
            .map(|s| s.name.as_str())
            .collect();
        meta_parts.push(format!("Sides: {}", sides.join(", ")));
    }

    if !item.allergen_ids.is_empty() {
        let allergens: Vec<String> = item
            .allergen_ids
            .iter()
            .map(|id| match registries.allergen(*id) {
                Some(a) => format!("{} {}", a.id, a.name),
                None => id.to_string(),
            })
            .collect();
        meta_parts.push(format!("Allergens: {}", allergens.join(", ")));
    }

    if !item.tags.is_empty() {
        let tags: Vec<&str> = item.tags.iter().map(|t| t.name.as_str()).collect();
        meta_parts.push(format!("Tags: {}", tags.join(", ")));
    }

    if !meta_parts.is_empty() {
        line.push_str(&format!("\n  {}", meta_parts.join(" | ")));
    }

    line
}

/// Markdown menu for floor staff: every category in pre-order with its
/// items. Hidden items are left out unless the config asks for them.
pub fn render_staff_view(roots: &[Arc<Category>], registries: &Registries, config: &MenuConfig) -> Result<String> {
    let mut content = String::from("# Menu\n");

    for (category, depth) in tree::flatten(roots)? {
        let level = "#".repeat((depth + 2).min(6));
        content.push_str(&format!("\n{} {}\n\n", level, category.name));

        let visible: Vec<&Item> = category
            .items
            .iter()
            .filter(|i| config.show_hidden_in_staff_view || i.status != ItemStatus::Hidden)
            .collect();

        if visible.is_empty() {
            if !category.has_children() {
                content.push_str("*No items.*\n");
            }
            continue;
        }

        for item in visible {
            content.push_str(&format_staff_line(item, registries, config));
            content.push('\n');
        }
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Dataset;

    fn seed() -> Dataset {
        Dataset::builtin().unwrap()
    }

    #[test]
    fn test_breadcrumb() {
        let dataset = seed();
        let path = tree::category_path("cat-pizza-classic", &dataset.categories).unwrap();
        assert_eq!(render_breadcrumb(&path), "Menu / Pizza / Classic");
        assert_eq!(render_breadcrumb(&[]), "Menu");
    }

    #[test]
    fn test_tree_outline() {
        let dataset = seed();
        let outline = render_tree(&dataset.categories).unwrap();
        assert!(outline.starts_with("- Starters [starter] (cat-starters) 2 items\n"));
        assert!(outline.contains("\n  - Classic [pizza] (cat-pizza-classic) 2 items\n"));
        assert!(outline.contains("\n  - Soft drinks [drink] (cat-drinks-soft) 1 item\n"));
    }

    #[test]
    fn test_listing_without_selection() {
        let listing = item_listing(None).unwrap();
        assert_eq!(listing, ItemListing::NoSelection);
        let text = render_item_listing(&listing, &Registries::default(), &MenuConfig::default(), &[]);
        assert_eq!(text, "Please select a category.\n");
    }

    #[test]
    fn test_listing_grouped_for_parent_category() {
        let dataset = seed();
        let pizza = tree::find_category("cat-pizza", &dataset.categories).unwrap().unwrap();
        let listing = item_listing(Some(&*pizza)).unwrap();
        match &listing {
            ItemListing::Grouped { title, groups } => {
                assert_eq!(title, "Items in Pizza");
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].category_name, "Classic");
            }
            other => panic!("Expected grouped listing, got {:?}", other),
        }

        let text = render_item_listing(
            &listing,
            &dataset.registries,
            &MenuConfig::default(),
            &["item-diavola".to_string()],
        );
        assert!(text.contains("## Classic"));
        assert!(text.contains("[ ] Margherita (item-margherita)  150-229 Kč  Available"));
        assert!(text.contains("[x] Diavola (item-diavola)  189 Kč  Available"));
    }

    #[test]
    fn test_listing_empty_states() {
        let empty_leaf = Category::new("c", "Empty");
        let listing = item_listing(Some(&empty_leaf)).unwrap();
        let text = render_item_listing(&listing, &Registries::default(), &MenuConfig::default(), &[]);
        assert!(text.contains(EMPTY_CATEGORY));

        let empty_parent = Category::new("p", "Parent").with_children(vec![Category::new("c", "Child")]);
        let listing = item_listing(Some(&empty_parent)).unwrap();
        let text = render_item_listing(&listing, &Registries::default(), &MenuConfig::default(), &[]);
        assert!(text.contains(EMPTY_SUBTREE));
    }

    #[test]
    fn test_item_card_resolves_side_dish_names() {
        let dataset = seed();
        let item = tree::find_item(&dataset.categories, "item-schnitzel").unwrap();
        let card = render_item_card(&item, &dataset.registries, &MenuConfig::default(), false);
        assert!(card.contains("Sides: Boiled potatoes, French fries"));
        assert!(card.contains("Tags: Bestseller"));
        assert!(card.contains("Allergens: 1, 3"));
    }

    #[test]
    fn test_staff_view_hides_hidden_items() {
        let dataset = seed();
        let config = MenuConfig::default();
        let view = render_staff_view(&dataset.categories, &dataset.registries, &config).unwrap();

        assert!(view.starts_with("# Menu\n"));
        assert!(view.contains("## Pizza\n"));
        assert!(view.contains("### Classic\n"));
        assert!(view.contains("- **Margherita** 150-229 Kč"));
        assert!(view.contains("- **Kofola** 45 Kč `[sold out]`"));
        assert!(view.contains("`[out of stock: Edam]`"));
        assert!(view.contains("Allergens: 1 Cereals containing gluten, 7 Milk"));
        assert!(!view.contains("Pancakes"));
        assert!(view.contains("### White pizza\n\n*No items.*\n"));
    }

    #[test]
    fn test_staff_view_can_show_hidden() {
        let dataset = seed();
        let config = MenuConfig {
            show_hidden_in_staff_view: true,
            ..Default::default()
        };
        let view = render_staff_view(&dataset.categories, &dataset.registries, &config).unwrap();
        assert!(view.contains("- **Pancakes** 99 Kč `[hidden]`"));
    }
}
