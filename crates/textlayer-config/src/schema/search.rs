//! Search behaviour configuration.

use serde::{Deserialize, Serialize};
use textlayer_common::MatchOptions;

/// Default match options applied to every query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub ignore_case: bool,
    /// Only match whole words.
    pub complete_words: bool,
}

impl SearchConfig {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            ignore_case: self.ignore_case,
            complete_words: self.complete_words,
        }
    }
}

impl From<&SearchConfig> for MatchOptions {
    fn from(config: &SearchConfig) -> Self {
        config.match_options()
    }
}
