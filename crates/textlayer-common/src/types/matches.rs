use serde::{Deserialize, Serialize};

/// Recognized match options for a search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    #[serde(alias = "ignoreCase")]
    pub ignore_case: bool,
    /// Require word boundaries on both sides of a match.
    #[serde(alias = "completeWords")]
    pub complete_words: bool,
}

/// A char offset inside one original (unnormalized) fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub fragment_index: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(fragment_index: usize, offset: usize) -> Self {
        Position {
            fragment_index,
            offset,
        }
    }
}

/// A search hit expressed in original fragment/offset coordinates.
///
/// `original_offset` is the start offset in the normalized string. Matches
/// from several queries are sorted by it before marking so that rendering
/// proceeds left to right across the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedMatch {
    pub start: Position,
    pub end: Position,
    pub text: String,
    pub original_offset: usize,
}

impl MappedMatch {
    /// Whether the match lies inside a single fragment.
    pub fn is_single_fragment(&self) -> bool {
        self.start.fragment_index == self.end.fragment_index
    }

    /// Indices of every fragment the match touches, in order.
    pub fn fragment_indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start.fragment_index..=self.end.fragment_index
    }

    /// Rendering order: ascending `original_offset`, shorter match first on
    /// ties, so the final layout does not depend on query order.
    pub fn render_key(&self) -> (usize, Position) {
        (self.original_offset, self.end)
    }
}

/// Sort matches into rendering order (see [`MappedMatch::render_key`]).
pub fn sort_by_original_offset(matches: &mut [MappedMatch]) {
    matches.sort_by_key(MappedMatch::render_key);
}
