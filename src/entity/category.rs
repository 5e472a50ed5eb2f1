// src/entity/category.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Item;

/// Menu section kind; drives which editor sections apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    MainCourse,
    Pizza,
    Dessert,
    Drink,
    Starter,
    Soup,
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKind::MainCourse => write!(f, "main_course"),
            CategoryKind::Pizza => write!(f, "pizza"),
            CategoryKind::Dessert => write!(f, "dessert"),
            CategoryKind::Drink => write!(f, "drink"),
            CategoryKind::Starter => write!(f, "starter"),
            CategoryKind::Soup => write!(f, "soup"),
        }
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "main_course" | "maincourse" => Ok(CategoryKind::MainCourse),
            "pizza" => Ok(CategoryKind::Pizza),
            "dessert" => Ok(CategoryKind::Dessert),
            "drink" => Ok(CategoryKind::Drink),
            "starter" => Ok(CategoryKind::Starter),
            "soup" => Ok(CategoryKind::Soup),
            _ => Err(format!("Invalid category type: {}", s)),
        }
    }
}

/// A node in the menu tree. Children are shared by `Arc` so an edit only
/// rebuilds the categories on the path to the changed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_categories: Vec<Arc<Category>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CategoryKind>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            items: Vec::new(),
            sub_categories: Vec::new(),
            kind: None,
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.sub_categories = children.into_iter().map(Arc::new).collect();
        self
    }

    pub fn with_kind(mut self, kind: CategoryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.sub_categories.is_empty()
    }
}
