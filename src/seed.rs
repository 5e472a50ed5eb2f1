//! Menu datasets: the built-in demo menu and dataset files.
//!
//! Dataset files are parsed with `serde_json`'s default recursion limit of
//! 128, which allows roughly 60 levels of nested categories. Deeper files
//! fail to load with a JSON error.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::Category;
use crate::error::Result;
use crate::registry::Registries;

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// A complete menu: the category forest plus the global registries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Arc<Category>>,
    #[serde(flatten)]
    pub registries: Registries,
}

impl Dataset {
    /// The demo menu compiled into the binary
    pub fn builtin() -> Result<Self> {
        Ok(serde_json::from_str(BUILTIN_SEED)?)
    }

    /// Read a dataset from a JSON file in the same format as the demo menu
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading dataset");
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load `path` if given, otherwise the built-in demo menu
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }
}
