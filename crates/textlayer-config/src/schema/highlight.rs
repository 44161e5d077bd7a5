//! Highlight rendering configuration.

use serde::{Deserialize, Serialize};
use textlayer_common::DEFAULT_MARKER_CLASS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Class attribute of rendered highlight spans (space-separated class names).
    pub marker_class: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.into(),
        }
    }
}
