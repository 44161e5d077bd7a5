//! Normalization: rejoin fragments into the string that queries run against.
//!
//! Fragments are concatenated with a `\n` after every fragment that ends a
//! line. Two rewrites then rejoin words broken by the layout:
//!
//! 1. a `\n` between two CJK characters is dropped;
//! 2. `-\n` after a non-whitespace character is dropped (soft hyphen).
//!
//! Every remaining `\n` becomes a single space.

use std::sync::LazyLock;

use regex::Regex;
use textlayer_common::Fragment;

static CJK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\p{Ideographic}|[\x{3040}-\x{30FF}])$").unwrap());

/// Whether `c` is Ideographic or in the Hiragana/Katakana block.
pub fn is_cjk(c: char) -> bool {
    let mut buf = [0u8; 4];
    CJK_RE.is_match(c.encode_utf8(&mut buf))
}

/// What happens to the line break that follows a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// The fragment does not end a line.
    None,
    /// The break survives as one space.
    Space,
    /// The break sat between two CJK characters and was removed.
    CjkJoin,
    /// The break followed a soft hyphen; hyphen and break were removed.
    Hyphen,
}

/// How one fragment's chars fare in the normalized string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSpan {
    pub text_len: usize,
    /// Local indices of text chars dropped by normalization, ascending.
    /// In practice only a trailing soft hyphen.
    pub removed: Vec<usize>,
    pub line_break: LineBreak,
}

impl FragmentSpan {
    /// Chars of the fragment's own text that survive normalization.
    pub fn visible_len(&self) -> usize {
        self.text_len - self.removed.len()
    }

    /// Chars the fragment contributes to the normalized string, line break included.
    pub fn normalized_len(&self) -> usize {
        self.visible_len() + usize::from(self.line_break == LineBreak::Space)
    }

    /// Net change to the fragment's length: `normalized_len - text_len`.
    pub fn adjustment(&self) -> isize {
        self.normalized_len() as isize - self.text_len as isize
    }

    /// Text index of the `n`th surviving char, or `text_len` past the last one.
    pub fn text_index(&self, n: usize) -> usize {
        let mut index = n;
        for &r in &self.removed {
            if r <= index {
                index += 1;
            }
        }
        index.min(self.text_len)
    }

    /// Text index just past the first `n` surviving chars.
    pub fn text_end(&self, n: usize) -> usize {
        match n {
            0 => 0,
            n => (self.text_index(n - 1) + 1).min(self.text_len),
        }
    }
}

/// Fate of one joined-text char.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fate {
    Kept,
    CjkJoin,
    SoftHyphen,
}

impl Fate {
    fn line_break(self) -> LineBreak {
        match self {
            Fate::Kept => LineBreak::Space,
            Fate::CjkJoin => LineBreak::CjkJoin,
            Fate::SoftHyphen => LineBreak::Hyphen,
        }
    }
}

/// Concatenate fragment texts, inserting `\n` after each line-ending fragment.
pub fn join_fragments(fragments: &[Fragment]) -> Vec<char> {
    let mut joined = Vec::new();
    for fragment in fragments {
        joined.extend(fragment.text.chars());
        if fragment.ends_line {
            joined.push('\n');
        }
    }
    joined
}

/// Build the normalized search string for a fragment sequence.
pub fn normalize(fragments: &[Fragment]) -> String {
    let joined = join_fragments(fragments);
    let fates = fates(&joined);
    joined
        .iter()
        .zip(&fates)
        .filter(|&(_, &fate)| fate == Fate::Kept)
        .map(|(&c, _)| if c == '\n' { ' ' } else { c })
        .collect()
}

/// Per-fragment accounting of what normalization keeps. Derived from the
/// same per-char pass as [`normalize`], so the contributions always sum to
/// the normalized length.
pub fn fragment_spans(fragments: &[Fragment]) -> Vec<FragmentSpan> {
    let joined = join_fragments(fragments);
    let fates = fates(&joined);

    let mut spans = Vec::with_capacity(fragments.len());
    let mut pos = 0;
    for fragment in fragments {
        let text_len = fragment.char_len();
        let removed = (0..text_len)
            .filter(|&i| fates[pos + i] != Fate::Kept)
            .collect();
        pos += text_len;

        let line_break = if fragment.ends_line {
            pos += 1;
            fates[pos - 1].line_break()
        } else {
            LineBreak::None
        };
        spans.push(FragmentSpan {
            text_len,
            removed,
            line_break,
        });
    }
    spans
}

/// Decide the fate of every joined char. A `\n` between two CJK chars is
/// dropped first; soft hyphens are then judged on what remains.
fn fates(chars: &[char]) -> Vec<Fate> {
    let mut fates = vec![Fate::Kept; chars.len()];
    for i in 1..chars.len().saturating_sub(1) {
        if chars[i] == '\n' && is_cjk(chars[i - 1]) && is_cjk(chars[i + 1]) {
            fates[i] = Fate::CjkJoin;
        }
    }

    let kept: Vec<usize> = (0..chars.len())
        .filter(|&i| fates[i] == Fate::Kept)
        .collect();
    let mut k = 0;
    while k < kept.len() {
        let soft_hyphen = chars[kept[k]] == '-'
            && kept.get(k + 1).is_some_and(|&next| chars[next] == '\n')
            && k > 0
            && !chars[kept[k - 1]].is_whitespace();
        if soft_hyphen {
            fates[kept[k]] = Fate::SoftHyphen;
            fates[kept[k + 1]] = Fate::SoftHyphen;
            k += 2;
        } else {
            k += 1;
        }
    }
    fates
}
