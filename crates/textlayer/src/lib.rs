//! Find search queries in the text fragments of a rendered page and mark the
//! matches inside the page's visual containers.
//!
//! Fragments are searched as one rejoined string, so words split by a line
//! wrap, a soft hyphen, or a CJK line break are still found. Matches are
//! reported against the original fragments so each container can be marked
//! exactly.
//!
//! ```rust
//! use textlayer::{
//!     find_matches, highlight_matches, reset_containers, Container, Fragment, MatchOptions,
//! };
//!
//! let fragments = vec![Fragment::eol("inter-"), Fragment::new("net access")];
//! let mut containers: Vec<Option<Container>> = fragments
//!     .iter()
//!     .map(|f| Some(Container::plain(f.text.clone())))
//!     .collect();
//!
//! let matches = find_matches(&["internet"], &fragments, &MatchOptions::default());
//! highlight_matches(&matches, &fragments, &mut containers);
//! assert_eq!(containers[1].as_ref().unwrap().highlights(), vec!["net"]);
//!
//! reset_containers(&fragments, &mut containers);
//! assert!(!containers[0].as_ref().unwrap().is_marked());
//! ```

mod highlighter;

#[cfg(test)]
mod tests;

pub use highlighter::Highlighter;
pub use textlayer_common::{
    sort_by_original_offset, ConfigError, Fragment, MappedMatch, MatchOptions, Position, Result,
    TextLayerError,
};
pub use textlayer_config::{LogLevel, TextLayerConfig};
pub use textlayer_highlight::{
    highlight_matches, reset_containers, Container, Segment, SegmentKind, DEFAULT_MARKER_CLASS,
};

use textlayer_search::{map_matches, search_query};
use tracing::debug;

/// Run every query over `fragments` and map the hits to fragment coordinates.
///
/// Results are concatenated in query order, each query's hits left to right.
/// They are not sorted across queries; [`highlight_matches`] does that.
pub fn find_matches<S: AsRef<str>>(
    queries: &[S],
    fragments: &[Fragment],
    options: &MatchOptions,
) -> Vec<MappedMatch> {
    let mut mapped = Vec::new();
    for query in queries {
        let raw = search_query(fragments, query.as_ref(), options);
        mapped.extend(map_matches(&raw, fragments));
    }
    debug!(
        queries = queries.len(),
        matches = mapped.len(),
        "found matches"
    );
    mapped
}
