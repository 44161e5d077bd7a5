//! Visual container model.
//!
//! A container starts out as a plain text payload. The first highlight
//! promotes it to an ordered list of plain and highlighted segments; every
//! later mark or reset works on that list.

use serde::{Deserialize, Serialize};
use textlayer_common::{char_len, char_slice};

pub use textlayer_common::DEFAULT_MARKER_CLASS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Plain,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            kind: SegmentKind::Plain,
        }
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            kind: SegmentKind::Highlight,
        }
    }

    pub fn is_highlight(&self) -> bool {
        self.kind == SegmentKind::Highlight
    }
}

/// The rendered node for one fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    Unpromoted(String),
    Promoted(Vec<Segment>),
}

impl Container {
    pub fn plain(text: impl Into<String>) -> Self {
        Container::Unpromoted(text.into())
    }

    /// Full text content, markers stripped.
    pub fn text(&self) -> String {
        match self {
            Container::Unpromoted(text) => text.clone(),
            Container::Promoted(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
        }
    }

    pub fn char_len(&self) -> usize {
        match self {
            Container::Unpromoted(text) => char_len(text),
            Container::Promoted(segments) => segments.iter().map(|s| char_len(&s.text)).sum(),
        }
    }

    pub fn is_promoted(&self) -> bool {
        matches!(self, Container::Promoted(_))
    }

    /// Whether any highlighted segment is present.
    pub fn is_marked(&self) -> bool {
        match self {
            Container::Unpromoted(_) => false,
            Container::Promoted(segments) => segments.iter().any(Segment::is_highlight),
        }
    }

    /// Highlighted runs, in order.
    pub fn highlights(&self) -> Vec<&str> {
        match self {
            Container::Unpromoted(_) => Vec::new(),
            Container::Promoted(segments) => segments
                .iter()
                .filter(|s| s.is_highlight())
                .map(|s| s.text.as_str())
                .collect(),
        }
    }

    /// Turn a plain payload into a single-segment container. No-op once promoted.
    pub fn promote(&mut self) {
        if let Container::Unpromoted(text) = self {
            let segments = if text.is_empty() {
                Vec::new()
            } else {
                vec![Segment::plain(std::mem::take(text))]
            };
            *self = Container::Promoted(segments);
        }
    }

    /// Highlight chars `[start, end)` with `text` as the marked content.
    ///
    /// Existing segments are re-partitioned around the new span: whatever
    /// lies before `start` or from `end` on is kept with its current kind,
    /// the overlapped portion is replaced. `start` and `end` must already be
    /// clamped to the container length. An empty range leaves the container
    /// untouched.
    pub fn mark(&mut self, start: usize, end: usize, text: &str) {
        if start >= end {
            return;
        }
        self.promote();
        if let Container::Promoted(segments) = self {
            let total: usize = segments.iter().map(|s| char_len(&s.text)).sum();
            let mut next = carve(segments, 0, start);
            next.push(Segment::highlight(text));
            next.extend(carve(segments, end, total));
            *segments = coalesce(next);
        }
    }

    /// Replace marked-up content with a single plain payload. Unpromoted
    /// containers are left as they are.
    pub fn reset(&mut self, original: &str) {
        if let Container::Promoted(segments) = self {
            *segments = vec![Segment::plain(original)];
        }
    }

    /// Render as HTML, wrapping highlighted runs in `<span class="...">`.
    pub fn to_html(&self, marker_class: &str) -> String {
        match self {
            Container::Unpromoted(text) => escape_html(text),
            Container::Promoted(segments) => {
                let mut html = String::new();
                for segment in segments {
                    match segment.kind {
                        SegmentKind::Plain => html.push_str(&escape_html(&segment.text)),
                        SegmentKind::Highlight => {
                            html.push_str("<span class=\"");
                            html.push_str(&escape_html(marker_class));
                            html.push_str("\">");
                            html.push_str(&escape_html(&segment.text));
                            html.push_str("</span>");
                        }
                    }
                }
                html
            }
        }
    }
}

/// Pieces of `segments` covering chars `[from, to)`, kinds preserved.
fn carve(segments: &[Segment], from: usize, to: usize) -> Vec<Segment> {
    let mut pieces = Vec::new();
    let mut pos = 0;
    for segment in segments {
        let len = char_len(&segment.text);
        let (seg_start, seg_end) = (pos, pos + len);
        pos = seg_end;

        let lo = from.max(seg_start);
        let hi = to.min(seg_end);
        if lo < hi {
            pieces.push(Segment {
                text: char_slice(&segment.text, lo - seg_start, hi - seg_start).to_string(),
                kind: segment.kind,
            });
        }
    }
    pieces
}

/// Merge neighbouring plain segments and drop empty ones. Highlight
/// segments stay separate, one per mark.
fn coalesce(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        if segment.text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if !last.is_highlight() && !segment.is_highlight() => {
                last.text.push_str(&segment.text);
            }
            _ => out.push(segment),
        }
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
