//! Text-layer search configuration.
//!
//! TOML-based, with serde defaults on every section so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use textlayer_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HighlightConfig, LogLevel, LoggingConfig, SearchConfig, TextLayerConfig};
pub use toml_loader::{
    create_default_config, default_config_path, load_default, load_from_path, load_or_create,
};

use textlayer_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<TextLayerConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TextLayerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
