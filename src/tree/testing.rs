// src/tree/testing.rs
//! Random forests for property tests. Category ids are `c0, c1, ...` and
//! item ids `i0, i1, ...`, both unique and numbered in pre-order.

use std::sync::Arc;

use proptest::prelude::*;

use crate::entity::{Category, Item};

#[derive(Debug, Clone)]
struct Shape {
    items: usize,
    children: Vec<Shape>,
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = (0usize..3).prop_map(|items| Shape { items, children: Vec::new() });
    leaf.prop_recursive(4, 32, 4, |inner| {
        (0usize..3, prop::collection::vec(inner, 0..4))
            .prop_map(|(items, children)| Shape { items, children })
    })
}

fn build(shape: &Shape, next_category: &mut usize, next_item: &mut usize) -> Category {
    let id = format!("c{}", next_category);
    *next_category += 1;

    let items = (0..shape.items)
        .map(|_| {
            let item = Item::new(format!("i{}", next_item), format!("Item {}", next_item), 100.0);
            *next_item += 1;
            item
        })
        .collect();
    let children = shape
        .children
        .iter()
        .map(|child| build(child, next_category, next_item))
        .collect();

    Category::new(id.clone(), format!("Category {}", id))
        .with_items(items)
        .with_children(children)
}

pub fn forest() -> impl Strategy<Value = Vec<Arc<Category>>> {
    prop::collection::vec(shape(), 1..4).prop_map(|shapes| {
        let (mut next_category, mut next_item) = (0, 0);
        shapes
            .iter()
            .map(|s| Arc::new(build(s, &mut next_category, &mut next_item)))
            .collect()
    })
}

/// Every category id, pre-order
pub fn category_ids(roots: &[Arc<Category>]) -> Vec<String> {
    roots
        .iter()
        .flat_map(|node| {
            std::iter::once(node.id.clone()).chain(category_ids(&node.sub_categories))
        })
        .collect()
}

/// Item ids of `category` and its descendants, pre-order
pub fn subtree_item_ids(category: &Category) -> Vec<String> {
    category
        .items
        .iter()
        .map(|item| item.id.clone())
        .chain(category.sub_categories.iter().flat_map(|c| subtree_item_ids(c)))
        .collect()
}

pub fn item_ids(roots: &[Arc<Category>]) -> Vec<String> {
    roots.iter().flat_map(|c| subtree_item_ids(c)).collect()
}
