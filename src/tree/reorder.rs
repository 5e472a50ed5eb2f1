// src/tree/reorder.rs
use std::sync::Arc;

use tracing::debug;

use crate::entity::Category;

/// Move the root category `active_id` to the position currently held by
/// `over_id`, keeping the relative order of all other roots.
///
/// Only top-level categories can be reordered. When `over_id` is absent,
/// equals `active_id`, or either id is not a root, the input order is
/// returned unchanged.
pub fn reorder_roots(
    roots: &[Arc<Category>],
    active_id: &str,
    over_id: Option<&str>,
) -> Vec<Arc<Category>> {
    let mut next = roots.to_vec();

    let Some(over_id) = over_id else {
        return next;
    };
    if over_id == active_id {
        return next;
    }

    let from = roots.iter().position(|c| c.id == active_id);
    let to = roots.iter().position(|c| c.id == over_id);
    let (Some(from), Some(to)) = (from, to) else {
        debug!(active_id, over_id, "reorder ignored: id is not a root category");
        return next;
    };

    let moved = next.remove(from);
    next.insert(to, moved);
    next
}
