//! Category tree model
//!
//! The menu is a forest of `Arc<Category>`. Traversals never mutate it;
//! mutations return a new forest that shares every untouched subtree.

mod collect;
mod mutate;
mod path;
mod reorder;
#[cfg(test)]
pub(crate) mod testing;

pub use collect::{collect_item_groups, ItemGroup};
pub use mutate::{find_item, find_item_owner, remove_items, replace_item, update_items};
pub use path::{category_path, find_category, flatten};
pub use reorder::reorder_roots;
