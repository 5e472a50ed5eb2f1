use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "menudesk.yaml";

/// Display and dataset settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Currency suffix for prices, e.g. "Kč"
    pub currency: String,
    /// Dataset file replacing the built-in demo menu. Relative paths are
    /// resolved against the config file's directory.
    pub dataset: Option<PathBuf>,
    /// Include hidden items in the staff view
    pub show_hidden_in_staff_view: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            currency: "Kč".to_string(),
            dataset: None,
            show_hidden_in_staff_view: false,
        }
    }
}

impl MenuConfig {
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)?;
        let mut config: MenuConfig = serde_yaml::from_str(&content)?;

        if let (Some(dataset), Some(dir)) = (config.dataset.as_mut(), path.parent()) {
            if dataset.is_relative() {
                *dataset = dir.join(&*dataset);
            }
        }
        Ok(config)
    }

    /// Use `explicit` if given, else `menudesk.yaml` in `dir` if it exists,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn format_price(&self, price: impl std::fmt::Display) -> String {
        if self.currency.is_empty() {
            price.to_string()
        } else {
            format!("{} {}", price, self.currency)
        }
    }
}
