// src/tree/collect.rs
use serde::Serialize;

use crate::entity::{Category, Item};
use crate::error::{MenuError, Result};

/// Items owned directly by one category in the walked subtree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemGroup<'a> {
    pub category_id: &'a str,
    pub category_name: &'a str,
    pub items: &'a [Item],
}

/// Group the items of `category` and all of its descendants by owning
/// category, in pre-order. Categories without direct items emit no group.
pub fn collect_item_groups(category: &Category) -> Result<Vec<ItemGroup<'_>>> {
    fn walk<'a>(
        node: &'a Category,
        ancestors: &mut Vec<&'a str>,
        groups: &mut Vec<ItemGroup<'a>>,
    ) -> Result<()> {
        if ancestors.contains(&node.id.as_str()) {
            return Err(MenuError::Structural { id: node.id.clone() });
        }

        if !node.items.is_empty() {
            groups.push(ItemGroup {
                category_id: &node.id,
                category_name: &node.name,
                items: &node.items,
            });
        }

        ancestors.push(&node.id);
        for child in &node.sub_categories {
            walk(child, ancestors, groups)?;
        }
        ancestors.pop();
        Ok(())
    }

    let mut groups = Vec::new();
    walk(category, &mut Vec::new(), &mut groups)?;
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{flatten, testing};
    use proptest::prelude::*;

    fn item(id: &str) -> Item {
        Item::new(id, id.to_uppercase(), 100.0)
    }

    #[test]
    fn test_single_nested_group() {
        let pizzas = Category::new("c1", "Pizzas").with_children(vec![Category::new("c2", "Margherita")
            .with_items(vec![Item::new("i1", "Margherita", 150.0)])]);

        let groups = collect_item_groups(&pizzas).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category_name, "Margherita");
        assert_eq!(groups[0].items.len(), 1);
        assert_eq!(groups[0].items[0].id, "i1");
    }

    #[test]
    fn test_groups_are_preorder_and_include_walk_root() {
        let root = Category::new("r", "Root")
            .with_items(vec![item("a")])
            .with_children(vec![
                Category::new("x", "X").with_children(vec![
                    Category::new("x1", "X1").with_items(vec![item("b"), item("c")]),
                ]),
                Category::new("y", "Y").with_items(vec![item("d")]),
            ]);

        let groups = collect_item_groups(&root).unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.category_name).collect();
        assert_eq!(names, vec!["Root", "X1", "Y"]);

        let all: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.id.as_str()))
            .collect();
        assert_eq!(all, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_items_anywhere_is_empty() {
        let root = Category::new("r", "Root")
            .with_children(vec![Category::new("x", "X").with_children(vec![Category::new("y", "Y")])]);
        assert!(collect_item_groups(&root).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_id_in_subtree_fails() {
        let root = Category::new("r", "Root").with_children(vec![Category::new("r", "Again")]);
        assert!(matches!(
            collect_item_groups(&root),
            Err(MenuError::Structural { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_groups_list_subtree_items_once_in_preorder(roots in testing::forest()) {
            for (category, _) in flatten(&roots).unwrap() {
                let groups = collect_item_groups(&category).unwrap();
                prop_assert!(groups.iter().all(|g| !g.items.is_empty()));

                let collected: Vec<String> = groups
                    .iter()
                    .flat_map(|g| g.items.iter().map(|i| i.id.clone()))
                    .collect();
                prop_assert_eq!(collected, testing::subtree_item_ids(&category));
            }
        }
    }
}
