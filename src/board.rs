//! The menu board: sole owner of the category forest, the registries and
//! the current selection.
//!
//! Views get read-only access; every change goes through a method here, one
//! per dashboard callback. Selected category and item are kept as ids and
//! resolved against the current forest, so they always reflect the latest
//! saved state.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::editor::ItemDraft;
use crate::entity::{Category, CategoryKind, Item, ItemStatus, SideDish};
use crate::error::{MenuError, Result};
use crate::registry::Registries;
use crate::seed::Dataset;
use crate::tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    NoSelection,
    CategorySelected,
    CategoryAndItemSelected,
}

/// Result of asking the editor to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Editor closed (nothing open, clean draft, or discard confirmed)
    Closed,
    /// Unsaved changes and the user declined to discard them
    Kept,
}

#[derive(Debug, Clone, Default)]
pub struct MenuBoard {
    categories: Vec<Arc<Category>>,
    registries: Registries,
    selected_category: Option<String>,
    editor: Option<ItemDraft>,
    bulk_selection: Vec<String>,
    search_query: String,
}

impl MenuBoard {
    pub fn new(categories: Vec<Arc<Category>>, registries: Registries) -> Self {
        Self {
            categories,
            registries,
            ..Default::default()
        }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(dataset.categories, dataset.registries)
    }

    pub fn categories(&self) -> &[Arc<Category>] {
        &self.categories
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn state(&self) -> SelectionState {
        match (&self.selected_category, &self.editor) {
            (None, _) => SelectionState::NoSelection,
            (Some(_), None) => SelectionState::CategorySelected,
            (Some(_), Some(_)) => SelectionState::CategoryAndItemSelected,
        }
    }

    pub fn selected_category_id(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// The selected category as it currently exists in the forest.
    pub fn selected_category(&self) -> Result<Option<Arc<Category>>> {
        match &self.selected_category {
            Some(id) => tree::find_category(id, &self.categories),
            None => Ok(None),
        }
    }

    /// Root-to-selection chain for the breadcrumb; empty with no selection.
    pub fn breadcrumb(&self) -> Result<Vec<Arc<Category>>> {
        match &self.selected_category {
            Some(id) => tree::category_path(id, &self.categories),
            None => Ok(Vec::new()),
        }
    }

    /// Select a category. Drops the open editor and the bulk selection.
    pub fn select_category(&mut self, category_id: &str) -> Result<Arc<Category>> {
        let category = tree::find_category(category_id, &self.categories)?
            .ok_or_else(|| MenuError::CategoryNotFound(category_id.to_string()))?;

        debug!(category_id, "category selected");
        self.selected_category = Some(category.id.clone());
        self.editor = None;
        self.bulk_selection.clear();
        Ok(category)
    }

    /// Open an edit session for an item inside the selected category's
    /// subtree. The selected category does not change.
    pub fn select_item(&mut self, item_id: &str) -> Result<&mut ItemDraft> {
        let category = self.selected_category()?.ok_or(MenuError::NoCategorySelected)?;
        let item = tree::find_item(std::slice::from_ref(&category), item_id)
            .ok_or_else(|| MenuError::ItemNotFound(item_id.to_string()))?;

        debug!(item_id, "item selected");
        Ok(self.editor.insert(ItemDraft::open(item)))
    }

    pub fn editor(&self) -> Option<&ItemDraft> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ItemDraft> {
        self.editor.as_mut()
    }

    /// Close the editor. A dirty draft is only discarded when `confirm`
    /// agrees; `confirm` is not consulted for a clean draft.
    pub fn close_editor<F>(&mut self, confirm: F) -> CloseOutcome
    where
        F: FnOnce(&ItemDraft) -> bool,
    {
        if let Some(draft) = &self.editor {
            if draft.is_dirty() && !confirm(draft) {
                debug!(item_id = %draft.item().id, "close cancelled, draft kept");
                return CloseOutcome::Kept;
            }
        }
        self.editor = None;
        CloseOutcome::Closed
    }

    /// Save the open draft into the forest. Returns `None` when the draft
    /// has no changes.
    pub fn save_item(&mut self) -> Result<Option<Item>> {
        let draft = self.editor.as_mut().ok_or(MenuError::NoItemSelected)?;
        if !draft.can_save() {
            debug!(item_id = %draft.item().id, "save skipped, draft is clean");
            return Ok(None);
        }

        let item = draft.mark_saved();
        self.commit_item(&item);
        Ok(Some(item))
    }

    /// Replace the canonical copy of `item` in the forest. Unknown ids
    /// leave the forest untouched.
    pub fn commit_item(&mut self, item: &Item) {
        if tree::find_item(&self.categories, &item.id).is_none() {
            debug!(item_id = %item.id, "commit ignored, item not in menu");
            return;
        }
        self.categories = tree::replace_item(&self.categories, item);
        info!(item_id = %item.id, "item saved");
    }

    /// Drag-release on the category list: move root `active_id` to the
    /// slot of `over_id`.
    pub fn drag_end(&mut self, active_id: &str, over_id: Option<&str>) {
        let next = tree::reorder_roots(&self.categories, active_id, over_id);
        let moved = next.iter().zip(&self.categories).any(|(a, b)| !Arc::ptr_eq(a, b));
        self.categories = next;

        if moved {
            info!(active_id, over_id = over_id.unwrap_or(""), "root categories reordered");
        } else {
            debug!(active_id, over_id = over_id.unwrap_or(""), "drag ended without a move");
        }
    }

    pub fn add_new_side_dish(&mut self, name: &str, price: f64) -> Result<SideDish> {
        self.registries.add_side_dish(name, price)
    }

    /// Create a side dish from raw user input and switch it on in the open
    /// draft.
    pub fn quick_add_side_dish(&mut self, name: &str, price_input: &str) -> Result<SideDish> {
        let kind = self.draft_kind()?;
        let draft = self.editor.as_mut().ok_or(MenuError::NoItemSelected)?;
        draft.quick_add_side_dish(name, price_input, kind, &mut self.registries)
    }

    /// Toggle an existing side dish on the open draft. Only main course
    /// items take new side dishes.
    pub fn toggle_draft_side_dish(&mut self, side_dish_id: &str) -> Result<()> {
        let kind = self.draft_kind()?;
        let draft = self.editor.as_mut().ok_or(MenuError::NoItemSelected)?;
        draft.toggle_side_dish(side_dish_id, kind)
    }

    /// Kind of the category owning the draft item, falling back to the
    /// nearest ancestor that declares one.
    fn draft_kind(&self) -> Result<Option<CategoryKind>> {
        let draft = self.editor.as_ref().ok_or(MenuError::NoItemSelected)?;
        let Some(owner) = tree::find_item_owner(&self.categories, &draft.item().id) else {
            return Ok(None);
        };
        let path = tree::category_path(&owner.id, &self.categories)?;
        Ok(path.iter().rev().find_map(|c| c.kind))
    }

    /// Toggle a tag on the open draft, copying it from the registry.
    pub fn toggle_draft_tag(&mut self, tag_id: &str) -> Result<bool> {
        let draft = self.editor.as_mut().ok_or(MenuError::NoItemSelected)?;
        Ok(draft.toggle_tag(tag_id, &self.registries))
    }

    pub fn toggle_select_item(&mut self, item_id: &str) {
        if let Some(pos) = self.bulk_selection.iter().position(|id| id == item_id) {
            self.bulk_selection.remove(pos);
        } else {
            self.bulk_selection.push(item_id.to_string());
        }
    }

    pub fn selected_items(&self) -> &[String] {
        &self.bulk_selection
    }

    pub fn is_selected_for_bulk(&self, item_id: &str) -> bool {
        self.bulk_selection.iter().any(|id| id == item_id)
    }

    /// Remove one item from the menu. Returns whether it existed.
    pub fn delete_item(&mut self, item_id: &str) -> bool {
        let ids: HashSet<String> = [item_id.to_string()].into_iter().collect();
        self.remove(&ids) > 0
    }

    /// Remove every bulk-selected item and clear the selection. Returns
    /// the number of items removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids: HashSet<String> = self.bulk_selection.drain(..).collect();
        let removed = self.remove(&ids);
        info!(removed, "selected items deleted");
        removed
    }

    fn remove(&mut self, ids: &HashSet<String>) -> usize {
        let existing = ids
            .iter()
            .filter(|id| tree::find_item(&self.categories, id).is_some())
            .count();
        if existing == 0 {
            return 0;
        }

        self.categories = tree::remove_items(&self.categories, ids);
        self.bulk_selection.retain(|id| !ids.contains(id));
        if self.editor.as_ref().is_some_and(|d| ids.contains(&d.item().id)) {
            self.editor = None;
        }
        existing
    }

    /// Set the status of every bulk-selected item. `input` must be exactly
    /// `AVAILABLE`, `SOLD_OUT` or `HIDDEN`; anything else is rejected and
    /// nothing changes. On success the bulk selection is cleared.
    pub fn bulk_change_status(&mut self, input: &str) -> Result<usize> {
        let status: ItemStatus = input
            .parse()
            .map_err(|_| MenuError::InvalidStatus(input.to_string()))?;

        let ids: HashSet<String> = self.bulk_selection.drain(..).collect();
        let mut changed = 0;
        self.categories = tree::update_items(&self.categories, &ids, |item| {
            item.status = status;
            changed += 1;
        });

        // The open draft takes the new status too, so a later save cannot
        // write the old one back.
        if let Some(draft) = self.editor.as_mut().filter(|d| ids.contains(&d.item().id)) {
            draft.rebase_status(status);
        }

        info!(%status, changed, "bulk status change");
        Ok(changed)
    }

    /// Search text typed above the category list. Stored for the view; it
    /// does not filter anything.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}
