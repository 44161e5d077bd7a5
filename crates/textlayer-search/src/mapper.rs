//! Coordinate mapping from normalized-string offsets back to
//! (fragment, offset) positions in the original fragments.

use textlayer_common::{Fragment, MappedMatch, Position};
use tracing::{trace, warn};

use super::normalize::{fragment_spans, FragmentSpan};
use super::types::RawMatch;

/// Normalized-length change of `fragments[index]`: `+1` for a surviving
/// line-break space, `-1` for a removed soft hyphen, `0` otherwise.
pub fn line_break_adjustment(fragments: &[Fragment], index: usize) -> isize {
    fragment_spans(fragments)
        .get(index)
        .map_or(0, FragmentSpan::adjustment)
}

/// Forward-only scan position over a fragment sequence.
///
/// `consumed` is the number of normalized chars contributed by every fragment
/// before `index`. The cursor only moves forward and never past the last
/// fragment, so mapping an ascending match list touches each fragment once.
#[derive(Debug, Clone)]
pub struct Cursor {
    spans: Vec<FragmentSpan>,
    index: usize,
    consumed: usize,
}

impl Cursor {
    pub fn new(fragments: &[Fragment]) -> Self {
        Cursor {
            spans: fragment_spans(fragments),
            index: 0,
            consumed: 0,
        }
    }

    /// Map one match. Matches must arrive in ascending offset order; an
    /// out-of-order match restarts the scan from the first fragment.
    pub fn map_match(&mut self, raw: &RawMatch) -> MappedMatch {
        if raw.offset < self.consumed {
            warn!(
                offset = raw.offset,
                consumed = self.consumed,
                "match out of order, rescanning from first fragment"
            );
            self.index = 0;
            self.consumed = 0;
        }

        while !self.is_last() && raw.offset >= self.visible_end() {
            self.step();
        }
        let start = self.start_position(raw.offset);

        let end_offset = raw.end();
        while !self.is_last() && end_offset > self.visible_end() {
            self.step();
        }
        let end = self.end_position(end_offset);

        MappedMatch {
            start,
            end,
            text: raw.text.clone(),
            original_offset: raw.offset,
        }
    }

    fn span(&self) -> Option<&FragmentSpan> {
        self.spans.get(self.index)
    }

    fn is_last(&self) -> bool {
        self.index + 1 >= self.spans.len()
    }

    /// Normalized offset just past the current fragment's surviving text.
    fn visible_end(&self) -> usize {
        self.consumed + self.span().map_or(0, FragmentSpan::visible_len)
    }

    fn step(&mut self) {
        self.consumed += self.span().map_or(0, FragmentSpan::normalized_len);
        self.index += 1;
        trace!(
            index = self.index,
            consumed = self.consumed,
            "cursor advanced"
        );
    }

    /// Surviving chars of the current fragment before `offset`, clamped to
    /// the visible text. Offsets on a line-break space clamp to its edge.
    fn local(&self, offset: usize) -> usize {
        let visible = self.span().map_or(0, FragmentSpan::visible_len);
        offset.saturating_sub(self.consumed).min(visible)
    }

    fn start_position(&self, offset: usize) -> Position {
        let local = self.local(offset);
        let text_offset = self.span().map_or(0, |span| span.text_index(local));
        Position::new(self.index, text_offset)
    }

    fn end_position(&self, offset: usize) -> Position {
        let local = self.local(offset);
        let text_offset = self.span().map_or(0, |span| span.text_end(local));
        Position::new(self.index, text_offset)
    }
}

/// Map the matches of one query, in ascending offset order, to fragment
/// coordinates. The cursor is threaded through the whole list.
pub fn map_matches(raw: &[RawMatch], fragments: &[Fragment]) -> Vec<MappedMatch> {
    if fragments.is_empty() {
        return Vec::new();
    }

    raw.iter()
        .scan(Cursor::new(fragments), |cursor, m| Some(cursor.map_match(m)))
        .collect()
}
