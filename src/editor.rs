//! Item edit sessions.
//!
//! An `ItemDraft` holds a private copy of the item being edited. Edits only
//! touch the copy; the canonical item changes when the board saves the
//! draft. The draft is dirty whenever it differs from its baseline in any
//! field.

use tracing::debug;

use crate::entity::{CategoryKind, Ingredient, Item, ItemStatus, SideDish, Variant};
use crate::error::{MenuError, Result};
use crate::registry::{parse_price, Registries};

fn toggle<T: PartialEq>(set: &mut Vec<T>, value: T) {
    if let Some(pos) = set.iter().position(|v| *v == value) {
        set.remove(pos);
    } else {
        set.push(value);
    }
}

fn check_price(price: f64) -> Result<f64> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(MenuError::InvalidPrice(price.to_string()))
    }
}

/// Side dishes are only offered for main course items.
pub fn side_dishes_allowed(kind: Option<CategoryKind>) -> bool {
    kind == Some(CategoryKind::MainCourse)
}

#[derive(Debug, Clone)]
pub struct ItemDraft {
    baseline: Item,
    draft: Item,
}

impl ItemDraft {
    pub fn open(item: Item) -> Self {
        Self {
            draft: item.clone(),
            baseline: item,
        }
    }

    /// The edited copy
    pub fn item(&self) -> &Item {
        &self.draft
    }

    /// The item as it was when the session opened or was last saved
    pub fn baseline(&self) -> &Item {
        &self.baseline
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    /// Saving is only offered for a dirty draft.
    pub fn can_save(&self) -> bool {
        self.is_dirty()
    }

    /// Make the current draft the new baseline and return it for commit.
    pub fn mark_saved(&mut self) -> Item {
        self.baseline = self.draft.clone();
        self.baseline.clone()
    }

    /// Throw away every edit since the last save.
    pub fn revert(&mut self) {
        self.draft = self.baseline.clone();
    }

    /// Move the baseline to a status set outside this session. The draft
    /// follows unless its own status was edited.
    pub fn rebase_status(&mut self, status: ItemStatus) {
        if self.draft.status == self.baseline.status {
            self.draft.status = status;
        }
        self.baseline.status = status;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_base_price(&mut self, price: f64) -> Result<()> {
        self.draft.base_price = check_price(price)?;
        Ok(())
    }

    pub fn set_status(&mut self, status: ItemStatus) {
        self.draft.status = status;
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.draft.icon = icon;
    }

    pub fn set_image_url(&mut self, image_url: Option<String>) {
        self.draft.image_url = image_url;
    }

    // Free-text base ingredients

    pub fn add_base_ingredient(&mut self) {
        self.draft.base_ingredients.push(String::new());
    }

    pub fn set_base_ingredient(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.draft.base_ingredients.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_base_ingredient(&mut self, index: usize) -> bool {
        if index < self.draft.base_ingredients.len() {
            self.draft.base_ingredients.remove(index);
            true
        } else {
            false
        }
    }

    // Variants

    /// Append a blank variant and return its index.
    pub fn add_variant(&mut self) -> usize {
        self.draft.variants.push(Variant::blank());
        self.draft.variants.len() - 1
    }

    pub fn set_variant_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.draft.variants.get_mut(index) {
            Some(variant) => {
                variant.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_variant_price(&mut self, index: usize, price: f64) -> Result<bool> {
        let price = check_price(price)?;
        Ok(match self.draft.variants.get_mut(index) {
            Some(variant) => {
                variant.price = price;
                true
            }
            None => false,
        })
    }

    pub fn remove_variant(&mut self, index: usize) -> bool {
        if index < self.draft.variants.len() {
            self.draft.variants.remove(index);
            true
        } else {
            false
        }
    }

    // Item-local optional ingredients

    /// Append a blank add-on ingredient and return its index.
    pub fn add_ingredient(&mut self) -> usize {
        self.draft.ingredients.push(Ingredient::blank());
        self.draft.ingredients.len() - 1
    }

    pub fn set_ingredient_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.draft.ingredients.get_mut(index) {
            Some(ingredient) => {
                ingredient.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn set_ingredient_price(&mut self, index: usize, price: f64) -> Result<bool> {
        let price = check_price(price)?;
        Ok(match self.draft.ingredients.get_mut(index) {
            Some(ingredient) => {
                ingredient.price = price;
                true
            }
            None => false,
        })
    }

    pub fn remove_ingredient(&mut self, index: usize) -> bool {
        if index < self.draft.ingredients.len() {
            self.draft.ingredients.remove(index);
            true
        } else {
            false
        }
    }

    // Set-valued assignments

    /// Toggle a quick tag. The registry entry is copied onto the draft.
    /// Unknown tag ids are ignored.
    pub fn toggle_tag(&mut self, tag_id: &str, registries: &Registries) -> bool {
        if let Some(pos) = self.draft.tags.iter().position(|t| t.id == tag_id) {
            self.draft.tags.remove(pos);
            return true;
        }
        match registries.tag(tag_id) {
            Some(tag) => {
                self.draft.tags.push(tag.clone());
                true
            }
            None => {
                debug!(tag_id, "unknown tag ignored");
                false
            }
        }
    }

    pub fn toggle_allergen(&mut self, allergen_id: u32) {
        toggle(&mut self.draft.allergen_ids, allergen_id);
    }

    pub fn toggle_managed_ingredient(&mut self, ingredient_id: &str) {
        toggle(&mut self.draft.managed_ingredient_ids, ingredient_id.to_string());
    }

    /// Toggle a side dish. Adding one requires a main course category;
    /// removing always works so stray assignments can be cleaned up.
    pub fn toggle_side_dish(&mut self, side_dish_id: &str, kind: Option<CategoryKind>) -> Result<()> {
        let assigned = self.draft.side_dish_ids.iter().any(|id| id == side_dish_id);
        if !assigned && !side_dishes_allowed(kind) {
            return Err(MenuError::SideDishesNotAllowed);
        }
        toggle(&mut self.draft.side_dish_ids, side_dish_id.to_string());
        Ok(())
    }

    /// Create a side dish in the registry and switch it on for this draft.
    ///
    /// `price_input` is the raw user input; invalid prices are rejected
    /// before the registry is touched.
    pub fn quick_add_side_dish(
        &mut self,
        name: &str,
        price_input: &str,
        kind: Option<CategoryKind>,
        registries: &mut Registries,
    ) -> Result<SideDish> {
        if !side_dishes_allowed(kind) {
            return Err(MenuError::SideDishesNotAllowed);
        }
        let price = parse_price(price_input)?;
        let side_dish = registries.add_side_dish(name, price)?;
        self.toggle_side_dish(&side_dish.id, kind)?;
        Ok(side_dish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::QuickTag;

    fn item() -> Item {
        let mut item = Item::new("i1", "Schnitzel", 189.0);
        item.base_ingredients = vec!["pork".into()];
        item.allergen_ids = vec![1];
        item
    }

    fn registries() -> Registries {
        Registries {
            tags: vec![QuickTag { id: "t1".into(), name: "New".into(), color: "green".into() }],
            ..Default::default()
        }
    }

    #[test]
    fn test_fresh_draft_is_clean() {
        let draft = ItemDraft::open(item());
        assert!(!draft.is_dirty());
        assert!(!draft.can_save());
        assert_eq!(draft.item(), draft.baseline());
    }

    #[test]
    fn test_any_single_field_change_is_dirty() {
        let reg = registries();
        let edits: Vec<Box<dyn Fn(&mut ItemDraft)>> = vec![
            Box::new(|d: &mut ItemDraft| d.set_name("Other")),
            Box::new(|d: &mut ItemDraft| d.set_description("Crispy")),
            Box::new(|d: &mut ItemDraft| d.set_base_price(190.0).unwrap()),
            Box::new(|d: &mut ItemDraft| d.set_status(ItemStatus::Hidden)),
            Box::new(|d: &mut ItemDraft| d.set_icon(Some("Beef".into()))),
            Box::new(|d: &mut ItemDraft| d.add_base_ingredient()),
            Box::new(|d: &mut ItemDraft| {
                d.set_base_ingredient(0, "veal");
            }),
            Box::new(|d: &mut ItemDraft| {
                d.add_variant();
            }),
            Box::new(|d: &mut ItemDraft| {
                d.add_ingredient();
            }),
            Box::new(|d: &mut ItemDraft| d.toggle_allergen(7)),
            Box::new(|d: &mut ItemDraft| d.toggle_managed_ingredient("m1")),
            Box::new(|d: &mut ItemDraft| {
                d.toggle_side_dish("sd1", Some(CategoryKind::MainCourse)).unwrap();
            }),
            Box::new(move |d: &mut ItemDraft| {
                d.toggle_tag("t1", &reg);
            }),
        ];

        for edit in edits {
            let mut draft = ItemDraft::open(item());
            edit(&mut draft);
            assert!(draft.is_dirty());
        }
    }

    #[test]
    fn test_toggle_back_is_clean() {
        let mut draft = ItemDraft::open(item());
        draft.toggle_allergen(1);
        assert!(draft.is_dirty());
        draft.toggle_allergen(1);
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_save_resets_baseline() {
        let mut draft = ItemDraft::open(item());
        draft.set_name("Veal schnitzel");
        let saved = draft.mark_saved();
        assert_eq!(saved.name, "Veal schnitzel");
        assert!(!draft.is_dirty());
        assert_eq!(draft.baseline().name, "Veal schnitzel");
    }

    #[test]
    fn test_revert() {
        let mut draft = ItemDraft::open(item());
        draft.set_status(ItemStatus::SoldOut);
        draft.revert();
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_rebase_status_keeps_other_edits() {
        let mut draft = ItemDraft::open(item());
        draft.set_name("Veal schnitzel");
        draft.rebase_status(ItemStatus::SoldOut);
        assert_eq!(draft.item().status, ItemStatus::SoldOut);
        assert_eq!(draft.item().name, "Veal schnitzel");

        draft.revert();
        assert_eq!(draft.item().status, ItemStatus::SoldOut);
        assert!(!draft.is_dirty());

        draft.set_status(ItemStatus::Hidden);
        draft.rebase_status(ItemStatus::Available);
        assert_eq!(draft.item().status, ItemStatus::Hidden);
        assert!(draft.is_dirty());
    }

    #[test]
    fn test_negative_prices_rejected() {
        let mut draft = ItemDraft::open(item());
        assert!(draft.set_base_price(-5.0).is_err());
        let idx = draft.add_variant();
        assert!(draft.set_variant_price(idx, -1.0).is_err());
        assert!(draft.set_variant_price(idx, 99.0).unwrap());
        assert!(!draft.set_variant_price(42, 99.0).unwrap());
        assert_eq!(draft.item().base_price, 189.0);
    }

    #[test]
    fn test_variant_and_ingredient_editing() {
        let mut draft = ItemDraft::open(item());
        let v = draft.add_variant();
        assert!(draft.set_variant_name(v, "Large"));
        assert!(draft.item().variants[0].id.starts_with("var-"));
        assert!(draft.remove_variant(v));
        assert!(!draft.remove_variant(v));

        let i = draft.add_ingredient();
        assert!(draft.set_ingredient_name(i, "Egg"));
        assert!(draft.set_ingredient_price(i, 15.0).unwrap());
        assert_eq!(draft.item().ingredients[0].price, 15.0);
        assert!(draft.item().ingredients[0].id.starts_with("ing-"));
        assert!(draft.remove_ingredient(i));

        assert!(draft.remove_base_ingredient(0));
        assert!(!draft.set_base_ingredient(3, "x"));
    }

    #[test]
    fn test_tag_is_copied_by_value() {
        let mut reg = registries();
        let mut draft = ItemDraft::open(item());
        assert!(draft.toggle_tag("t1", &reg));

        reg.tags[0].name = "Renamed".into();
        assert_eq!(draft.item().tags[0].name, "New");

        assert!(!draft.toggle_tag("unknown", &reg));
        assert!(draft.toggle_tag("t1", &reg));
        assert!(draft.item().tags.is_empty());
    }

    #[test]
    fn test_side_dish_toggle_requires_main_course() {
        let mut draft = ItemDraft::open(item());
        assert!(matches!(
            draft.toggle_side_dish("sd1", Some(CategoryKind::Pizza)),
            Err(MenuError::SideDishesNotAllowed)
        ));
        assert!(matches!(draft.toggle_side_dish("sd1", None), Err(MenuError::SideDishesNotAllowed)));
        assert!(!draft.is_dirty());

        draft.toggle_side_dish("sd1", Some(CategoryKind::MainCourse)).unwrap();
        assert_eq!(draft.item().side_dish_ids, vec!["sd1"]);
    }

    #[test]
    fn test_stray_side_dish_can_be_removed_anywhere() {
        let mut stray = item();
        stray.side_dish_ids = vec!["sd1".into()];
        let mut draft = ItemDraft::open(stray);
        draft.toggle_side_dish("sd1", Some(CategoryKind::Pizza)).unwrap();
        assert!(draft.item().side_dish_ids.is_empty());
    }

    #[test]
    fn test_quick_add_side_dish_toggles_it_on() {
        let mut reg = registries();
        let mut draft = ItemDraft::open(item());
        let sd = draft
            .quick_add_side_dish("Rice", "35", Some(CategoryKind::MainCourse), &mut reg)
            .unwrap();
        assert_eq!(reg.side_dishes, vec![sd.clone()]);
        assert_eq!(draft.item().side_dish_ids, vec![sd.id]);
    }

    #[test]
    fn test_quick_add_side_dish_validation() {
        let mut reg = registries();
        let mut draft = ItemDraft::open(item());
        let main = Some(CategoryKind::MainCourse);
        assert!(matches!(
            draft.quick_add_side_dish("Rice", "abc", main, &mut reg),
            Err(MenuError::InvalidPrice(_))
        ));
        assert!(matches!(
            draft.quick_add_side_dish("Rice", "-2", main, &mut reg),
            Err(MenuError::InvalidPrice(_))
        ));
        assert!(matches!(
            draft.quick_add_side_dish("Rice", "20", Some(CategoryKind::Pizza), &mut reg),
            Err(MenuError::SideDishesNotAllowed)
        ));
        assert!(reg.side_dishes.is_empty());
        assert!(!draft.is_dirty());
    }
}
