//! Char-offset helpers.
//!
//! Every offset in this workspace counts Unicode scalar values, not bytes.
//! These helpers translate between the two so callers never slice a `str`
//! on a non-boundary.

/// Number of chars in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the char at `char_idx`, or `s.len()` when past the end.
pub fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Slice `s` by char range `[start, end)`, clamping both ends to the string.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let end = end.max(start);
    let from = byte_offset(s, start);
    let to = byte_offset(s, end);
    &s[from..to]
}
