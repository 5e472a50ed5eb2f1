// src/tree/path.rs
//! Root-to-node lookups over the category forest.

use std::sync::Arc;

use crate::entity::Category;
use crate::error::{MenuError, Result};

/// Ancestor chain from a root down to `target_id`, inclusive.
///
/// Depth-first, pre-order; the first match in sibling order wins. Returns an
/// empty chain when no category carries `target_id`.
pub fn category_path(target_id: &str, roots: &[Arc<Category>]) -> Result<Vec<Arc<Category>>> {
    let mut path = Vec::new();
    if search(target_id, roots, &mut path)? {
        Ok(path)
    } else {
        Ok(Vec::new())
    }
}

fn search(target_id: &str, nodes: &[Arc<Category>], path: &mut Vec<Arc<Category>>) -> Result<bool> {
    for node in nodes {
        if path.iter().any(|ancestor| ancestor.id == node.id) {
            return Err(MenuError::Structural { id: node.id.clone() });
        }

        path.push(Arc::clone(node));
        if node.id == target_id || search(target_id, &node.sub_categories, path)? {
            return Ok(true);
        }
        path.pop();
    }

    Ok(false)
}

/// Find a category anywhere in the forest.
pub fn find_category(id: &str, roots: &[Arc<Category>]) -> Result<Option<Arc<Category>>> {
    Ok(category_path(id, roots)?.pop())
}

/// Pre-order listing of every category with its depth (roots are depth 0).
pub fn flatten(roots: &[Arc<Category>]) -> Result<Vec<(Arc<Category>, usize)>> {
    fn collect(
        nodes: &[Arc<Category>],
        ancestors: &mut Vec<String>,
        result: &mut Vec<(Arc<Category>, usize)>,
    ) -> Result<()> {
        for node in nodes {
            if ancestors.contains(&node.id) {
                return Err(MenuError::Structural { id: node.id.clone() });
            }
            result.push((Arc::clone(node), ancestors.len()));
            ancestors.push(node.id.clone());
            collect(&node.sub_categories, ancestors, result)?;
            ancestors.pop();
        }
        Ok(())
    }

    let mut result = Vec::new();
    collect(roots, &mut Vec::new(), &mut result)?;
    Ok(result)
}
