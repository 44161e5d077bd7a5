use serde::{Deserialize, Serialize};

use crate::chars::char_len;

/// One atomic run of text extracted from a page.
///
/// `ends_line` marks that a line/row boundary follows this fragment. The text
/// itself never contains line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fragment {
    #[serde(alias = "str")]
    pub text: String,
    #[serde(default, alias = "endsLine", alias = "hasEOL")]
    pub ends_line: bool,
}

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Fragment {
            text: text.into(),
            ends_line: false,
        }
    }

    /// A fragment followed by a line break.
    pub fn eol(text: impl Into<String>) -> Self {
        Fragment {
            text: text.into(),
            ends_line: true,
        }
    }

    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }
}
