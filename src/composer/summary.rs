//! Naive sentence-based summarization and character-safe truncation.

/// Delimiter separating sentence-like segments.
const SENTENCE_DELIMITER: &str = ". ";

/// Shortens `text` to its first `max_sentences` sentence-like segments.
///
/// Segments are delimited by the literal two-character sequence `". "`. Text
/// with no more than `max_sentences` segments is returned unchanged. Longer text
/// keeps the first `max_sentences` segments, rejoined with `". "`, and ends with
/// a single period.
///
/// # Example
///
/// ```rust
/// use sharepost::summarize;
///
/// assert_eq!(summarize("A. B. C. D. E.", 3), "A. B. C.");
/// assert_eq!(summarize("A. B. C.", 3), "A. B. C.");
/// ```
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let segments: Vec<&str> = text.split(SENTENCE_DELIMITER).collect();
    if segments.len() <= max_sentences {
        return text.to_string();
    }

    let mut summary = segments[..max_sentences].join(SENTENCE_DELIMITER);
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}

/// Returns the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, never bytes, so a multibyte character is
/// either kept whole or dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
