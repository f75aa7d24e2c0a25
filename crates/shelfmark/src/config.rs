use crate::prelude::*;
use shelfmark_core::config::CatalogConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the catalog configuration file
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("shelfmark").join("config.toml"))
}

/// Load the catalog configuration
///
/// An explicit path must exist. Without one, the default location is used if
/// present and built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<CatalogConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => {
            log::debug!("No configuration file found, using defaults");
            Ok(CatalogConfig::default())
        }
    }
}

pub fn read_config(path: &Path) -> Result<CatalogConfig> {
    log::debug!("Loading configuration from {}", path.display());

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

    CatalogConfig::from_toml(&text)
        .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)).into())
}
