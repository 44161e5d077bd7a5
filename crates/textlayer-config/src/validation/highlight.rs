//! Highlight marker validation.
//!
//! The marker class ends up inside an HTML attribute, so only plain class
//! tokens are accepted: ASCII letters, digits, `-`, `_`, separated by spaces.

pub(crate) fn validate_marker_class(errors: &mut Vec<String>, marker_class: &str) {
    if marker_class.trim().is_empty() {
        errors.push("highlight.marker_class must not be empty".into());
        return;
    }

    if let Some(bad) = marker_class
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ')))
    {
        errors.push(format!(
            "highlight.marker_class contains invalid character {bad:?}"
        ));
    }
}
