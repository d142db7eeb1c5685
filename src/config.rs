//! Configuration module
//!
//! Reads `~/.config/village/config.toml` (or an explicit path) into `Config`.

mod loader;
mod types;

pub use loader::{config_path, load_config, load_config_from_path};
pub use types::{Config, UiConfig};
