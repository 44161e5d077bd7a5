//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the workspace crates at this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "textlayer=trace",
            LogLevel::Debug => "textlayer=debug",
            LogLevel::Info => "textlayer=info",
            LogLevel::Warning => "textlayer=warn",
            LogLevel::Error => "textlayer=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
