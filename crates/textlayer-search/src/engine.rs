//! Search engine: query pattern construction and scanning of the normalized text.

use regex::{Regex, RegexBuilder};
use textlayer_common::{char_len, Fragment, MatchOptions};
use tracing::{debug, warn};

use super::normalize::normalize;
use super::types::RawMatch;

/// Compile the pattern for one query.
///
/// The query is trimmed and every regex metacharacter escaped, so user input
/// is always matched literally. Returns `None` when the trimmed query is
/// empty, and also when the engine refuses the pattern (size limits on huge
/// queries); both cases produce zero matches.
pub fn build_pattern(query: &str, options: &MatchOptions) -> Option<Regex> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let escaped = regex::escape(query);
    let pattern = if options.complete_words {
        format!(r"\b{escaped}\b")
    } else {
        escaped
    };

    match RegexBuilder::new(&pattern)
        .case_insensitive(options.ignore_case)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("search pattern for {query:?} rejected: {e}");
            None
        }
    }
}

/// Collect every non-overlapping match of `regex` in `haystack`, left to right.
///
/// Byte offsets reported by the regex engine are converted to char offsets
/// in a single forward pass.
pub fn find_all(regex: &Regex, haystack: &str) -> Vec<RawMatch> {
    let mut matches = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for mat in regex.find_iter(haystack) {
        if mat.is_empty() {
            continue;
        }
        char_pos += char_len(&haystack[byte_pos..mat.start()]);
        let length = char_len(mat.as_str());
        matches.push(RawMatch {
            offset: char_pos,
            length,
            text: mat.as_str().to_string(),
        });
        char_pos += length;
        byte_pos = mat.end();
    }

    matches
}

/// Run one query against the normalized text of `fragments`.
pub fn search_query(fragments: &[Fragment], query: &str, options: &MatchOptions) -> Vec<RawMatch> {
    let Some(regex) = build_pattern(query, options) else {
        return Vec::new();
    };

    let normalized = normalize(fragments);
    let matches = find_all(&regex, &normalized);
    debug!(
        query = query.trim(),
        fragments = fragments.len(),
        matches = matches.len(),
        "searched page text"
    );
    matches
}
