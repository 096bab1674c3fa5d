//! Helpers for logging user-supplied content.

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Flattens newlines and tabs to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_chars`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub fn sanitize_for_logging(text: &str, max_chars: usize) -> String {
    let mut sanitized = String::new();
    let mut truncated = false;

    for (count, c) in text.chars().enumerate() {
        if count == max_chars {
            truncated = true;
            break;
        }
        sanitized.push(match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        });
    }

    if truncated {
        format!(
            "{}... [truncated, {} total bytes]",
            sanitized,
            text.len()
        )
    } else {
        sanitized
    }
}
