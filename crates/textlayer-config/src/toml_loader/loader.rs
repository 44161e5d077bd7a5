//! Reading a config file, or the platform default one.

use std::path::Path;

use textlayer_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::TextLayerConfig;
use crate::validation;

/// Parse the TOML file at `path`.
///
/// Absent keys fall back to their defaults. Validation problems are logged
/// but the parsed config is still returned; callers that need a valid config
/// run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<TextLayerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let config: TextLayerConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("invalid TOML in {}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config does not validate: {e}");
    }
    info!(path = %path.display(), "loaded text layer config");
    Ok(config)
}

/// Load `path`, writing the documented default file there first when it is
/// missing.
pub fn load_or_create(path: &Path) -> Result<TextLayerConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(path)?;
            Ok(TextLayerConfig::default())
        }
        other => other,
    }
}

/// [`load_or_create`] at [`default_config_path`]
/// (`~/.config/textlayer/config.toml` on Linux).
pub fn load_default() -> Result<TextLayerConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
