// src/tree/mutate.rs
//! Copy-on-write edits of items held somewhere in the forest.
//!
//! Only the categories on a path from a root to a changed item are rebuilt;
//! every other subtree is handed back as the same `Arc`.

use std::collections::HashSet;
use std::sync::Arc;

use crate::entity::{Category, Item};

/// Rewrite the forest, calling `edit` on each category's direct items.
/// `edit` returns `Some(new_items)` only when it changed something.
/// Returns `None` when no category changed.
fn rewrite_forest<F>(nodes: &[Arc<Category>], edit: &mut F) -> Option<Vec<Arc<Category>>>
where
    F: FnMut(&[Item]) -> Option<Vec<Item>>,
{
    let mut changed = false;
    let next = nodes
        .iter()
        .map(|node| match rewrite_node(node, edit) {
            Some(rebuilt) => {
                changed = true;
                rebuilt
            }
            None => Arc::clone(node),
        })
        .collect();

    changed.then_some(next)
}

fn rewrite_node<F>(node: &Arc<Category>, edit: &mut F) -> Option<Arc<Category>>
where
    F: FnMut(&[Item]) -> Option<Vec<Item>>,
{
    let items = edit(&node.items);
    let children = rewrite_forest(&node.sub_categories, edit);

    if items.is_none() && children.is_none() {
        return None;
    }

    let mut rebuilt = Category::clone(node);
    if let Some(items) = items {
        rebuilt.items = items;
    }
    if let Some(children) = children {
        rebuilt.sub_categories = children;
    }
    Some(Arc::new(rebuilt))
}

fn unchanged(roots: &[Arc<Category>]) -> Vec<Arc<Category>> {
    roots.iter().map(Arc::clone).collect()
}

/// Replace every item whose id matches `updated.id`.
///
/// An id that matches nothing returns the input forest with every root
/// shared.
pub fn replace_item(roots: &[Arc<Category>], updated: &Item) -> Vec<Arc<Category>> {
    let mut edit = |items: &[Item]| {
        if !items.iter().any(|item| item.id == updated.id) {
            return None;
        }
        Some(
            items
                .iter()
                .map(|item| if item.id == updated.id { updated.clone() } else { item.clone() })
                .collect(),
        )
    };

    rewrite_forest(roots, &mut edit).unwrap_or_else(|| unchanged(roots))
}

/// Apply `change` to every item whose id is in `ids`.
pub fn update_items<F>(roots: &[Arc<Category>], ids: &HashSet<String>, mut change: F) -> Vec<Arc<Category>>
where
    F: FnMut(&mut Item),
{
    let mut edit = |items: &[Item]| {
        if !items.iter().any(|item| ids.contains(&item.id)) {
            return None;
        }
        Some(
            items
                .iter()
                .map(|item| {
                    let mut item = item.clone();
                    if ids.contains(&item.id) {
                        change(&mut item);
                    }
                    item
                })
                .collect(),
        )
    };

    rewrite_forest(roots, &mut edit).unwrap_or_else(|| unchanged(roots))
}

/// Drop every item whose id is in `ids`.
pub fn remove_items(roots: &[Arc<Category>], ids: &HashSet<String>) -> Vec<Arc<Category>> {
    let mut edit = |items: &[Item]| {
        if !items.iter().any(|item| ids.contains(&item.id)) {
            return None;
        }
        Some(items.iter().filter(|item| !ids.contains(&item.id)).cloned().collect())
    };

    rewrite_forest(roots, &mut edit).unwrap_or_else(|| unchanged(roots))
}

/// The category that directly owns `item_id`, first match in pre-order.
pub fn find_item_owner(roots: &[Arc<Category>], item_id: &str) -> Option<Arc<Category>> {
    for node in roots {
        if node.items.iter().any(|item| item.id == item_id) {
            return Some(Arc::clone(node));
        }
        if let Some(owner) = find_item_owner(&node.sub_categories, item_id) {
            return Some(owner);
        }
    }
    None
}

pub fn find_item(roots: &[Arc<Category>], item_id: &str) -> Option<Item> {
    find_item_owner(roots, item_id)
        .and_then(|owner| owner.items.iter().find(|item| item.id == item_id).cloned())
}
