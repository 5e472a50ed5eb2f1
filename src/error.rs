use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid status '{0}'. Enter one of: AVAILABLE, SOLD_OUT, HIDDEN")]
    InvalidStatus(String),

    #[error("Invalid price '{0}'. Enter a valid, non-negative price.")]
    InvalidPrice(String),

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("No category selected")]
    NoCategorySelected,

    #[error("No item selected")]
    NoItemSelected,

    #[error("Side dishes can only be assigned to main course items")]
    SideDishesNotAllowed,

    #[error("Category tree is malformed: '{id}' appears inside its own subtree")]
    Structural { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
