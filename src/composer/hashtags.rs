//! Hashtag derivation from post text.
//!
//! Keywords are picked by length alone: the first few words that are still
//! longer than three characters once punctuation is removed.

use regex::Regex;
use std::sync::LazyLock;

/// Matches every character that may not appear in a hashtag.
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("static regex is valid"));

/// Cleaned words must be longer than this to become hashtags.
const MIN_KEYWORD_EXCLUSIVE: usize = 3;

/// Derives up to `max_hashtags` hashtags from the words of `text`.
///
/// # Parameters
///
/// - `text`: The text to pick keywords from
/// - `max_hashtags`: Maximum number of hashtags to return
///
/// # Returns
///
/// Hashtags in the order their words appear, each prefixed with `#`.
///
/// # Example
///
/// ```rust
/// use sharepost::derive_hashtags;
///
/// assert_eq!(
///     derive_hashtags("the quick brown fox jumps", 3),
///     vec!["#quick", "#brown", "#jumps"]
/// );
/// ```
pub fn derive_hashtags(text: &str, max_hashtags: usize) -> Vec<String> {
    text.split_whitespace()
        .map(|word| NON_ALPHANUMERIC.replace_all(word, ""))
        .filter(|word| word.len() > MIN_KEYWORD_EXCLUSIVE)
        .take(max_hashtags)
        .map(|word| format!("#{}", word))
        .collect()
}

/// Joins hashtags with single spaces for display.
pub fn render_hashtags(hashtags: &[String]) -> String {
    hashtags.join(" ")
}
