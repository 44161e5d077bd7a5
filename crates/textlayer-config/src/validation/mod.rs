//! Configuration validation.
//!
//! Every check pushes onto a shared error list; the list is joined into a
//! single `ConfigError`.

mod highlight;


use crate::schema::TextLayerConfig;
use textlayer_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TextLayerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    highlight::validate_marker_class(&mut errors, &config.highlight.marker_class);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
