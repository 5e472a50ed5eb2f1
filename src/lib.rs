pub mod board;
pub mod cli;
pub mod config;
pub mod editor;
pub mod entity;
pub mod error;
pub mod registry;
pub mod seed;
pub mod tree;
pub mod validate;
pub mod view;

pub use board::{CloseOutcome, MenuBoard, SelectionState};
pub use config::MenuConfig;
pub use editor::ItemDraft;
pub use error::{MenuError, Result};
pub use registry::Registries;
pub use seed::Dataset;
