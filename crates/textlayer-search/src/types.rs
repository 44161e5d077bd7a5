//! Search types: RawMatch.

/// A single hit in normalized-string coordinates.
///
/// `offset` and `length` count chars of the normalized string produced by
/// [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub offset: usize,
    pub length: usize,
    pub text: String,
}

impl RawMatch {
    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}
