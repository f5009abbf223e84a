//! Character-based truncation.
//!
//! Limits count Unicode scalar values, never bytes, so multi-byte text is
//! never split inside a character.

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Returns at most the first `max` characters of `text`.
pub fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Like [`truncate`], appending [`ELLIPSIS`] when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let head = truncate(text, max);
    if head.len() < text.len() {
        format!("{head}{ELLIPSIS}")
    } else {
        head.to_string()
    }
}
