use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::VillageError;

const CONFIG_DIR: &str = "village";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, a missing default file yields
/// the default configuration. Malformed TOML is an error either way.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, VillageError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    match load_config_from_path(&path) {
        Err(VillageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        other => other,
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, VillageError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let config = parse_config_toml(&contents).map_err(|source| VillageError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config_toml(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
