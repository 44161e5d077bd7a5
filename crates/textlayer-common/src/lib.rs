pub mod chars;
pub mod errors;
pub mod types;

pub use chars::{byte_offset, char_len, char_slice};
pub use errors::{ConfigError, TextLayerError};
pub use types::{sort_by_original_offset, Fragment, MappedMatch, MatchOptions, Position};

/// Class the original text layer puts on highlight spans.
pub const DEFAULT_MARKER_CLASS: &str = "highlight appended";

pub type Result<T> = std::result::Result<T, TextLayerError>;
