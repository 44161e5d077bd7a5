//! Where the config lives, and writing the default file.

use std::path::{Path, PathBuf};

use textlayer_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// `<platform config dir>/textlayer/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("textlayer").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_failed)?;

    info!(path = %path.display(), "created default text layer config");
    Ok(())
}
