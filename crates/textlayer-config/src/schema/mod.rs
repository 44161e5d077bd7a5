//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod highlight;
mod search;
mod system;

pub use highlight::*;
pub use search::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TextLayerConfig {
    pub search: SearchConfig,
    pub highlight: HighlightConfig,
    pub logging: LoggingConfig,
}
