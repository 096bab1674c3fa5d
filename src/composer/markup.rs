//! Markup stripping for shareable text.
//!
//! Search results arrive as HTML fragments. Before anything can be posted the
//! markup has to go, leaving only the text a reader would see on the page.

use scraper::Html;

/// Extracts the readable text from a fragment in a single parse.
///
/// The fragment is parsed the same way a browser parses `innerHTML`, so
/// unmatched or broken tags are recovered from instead of rejected, entity
/// references are decoded and comments are dropped.
fn extract_text(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    fragment.root_element().text().collect()
}

/// Removes all markup from `input`, returning only the readable text.
///
/// Extraction is repeated until the text stops changing, so markup hidden
/// behind entity references (`&lt;b&gt;`) is removed as well and the result is
/// stable: stripping an already stripped string returns it unchanged.
/// A pass that changes the text always shortens it, so the loop terminates.
///
/// Text that was deliberately escaped is treated as markup too:
/// `Vec&lt;String&gt;` loses `<String>` where a browser would show it.
///
/// # Parameters
///
/// - `input`: Arbitrary text, possibly containing HTML markup
///
/// # Returns
///
/// The plain text content. Empty input yields an empty string.
///
/// # Example
///
/// ```rust
/// use sharepost::strip_markup;
///
/// assert_eq!(strip_markup("<p>AT&amp;T <b>rocks</b></p>"), "AT&T rocks");
/// ```
pub fn strip_markup(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut current = extract_text(input);
    loop {
        let next = extract_text(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_removes_tags() {
        assert_eq!(
            strip_markup("<p>AI is <em>amazing</em>.</p><p>It learns.</p>"),
            "AI is amazing.It learns."
        );
    }

    #[test]
    fn test_strip_markup_empty_and_plain() {
        assert_eq!(strip_markup(""), "");
        assert_eq!(strip_markup("no markup here"), "no markup here");
        assert_eq!(strip_markup("   "), "   ");
    }

    #[test]
    fn test_strip_markup_decodes_entities() {
        assert_eq!(strip_markup("Fish &amp; chips"), "Fish & chips");
        assert_eq!(strip_markup("caf&eacute;"), "café");
    }

    #[test]
    fn test_strip_markup_tolerates_broken_markup() {
        assert_eq!(strip_markup("<div><b>bold</div> tail"), "bold tail");
        assert_eq!(strip_markup("<p>unclosed"), "unclosed");
        assert_eq!(strip_markup("before <!-- note --> after"), "before  after");
        assert_eq!(strip_markup("</span>stray close"), "stray close");
    }

    #[test]
    fn test_strip_markup_keeps_lone_angle_brackets() {
        assert_eq!(strip_markup("3 < 5 and 7 > 2"), "3 < 5 and 7 > 2");
    }

    #[test]
    fn test_strip_markup_is_idempotent() {
        let inputs = [
            "",
            "plain",
            "<p>Hello <a href=\"x\">world</a></p>",
            "&lt;b&gt;escaped&lt;/b&gt; markup",
            "&amp;amp;lt; layered",
            "<ul><li>one</li><li>two</li></ul>",
            "3 < 5 and 7 > 2",
        ];

        for input in inputs {
            let once = strip_markup(input);
            assert_eq!(strip_markup(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_strip_markup_removes_escaped_tags() {
        assert_eq!(strip_markup("&lt;b&gt;escaped&lt;/b&gt;"), "escaped");
    }

    #[test]
    fn test_strip_markup_is_idempotent_for_deeply_nested_escapes() {
        let mut input = "&lt;b&gt;x".to_string();
        for _ in 0..12 {
            input = input.replace('&', "&amp;");
        }

        let once = strip_markup(&input);
        assert_eq!(once, "x");
        assert_eq!(strip_markup(&once), once);
    }

    #[test]
    fn test_strip_markup_drops_escaped_angle_bracket_text() {
        // Decoded entities are parsed again, so escaped generics read as tags
        assert_eq!(
            strip_markup("Use Vec&lt;String&gt; for lists and a&lt;b comparisons here"),
            "Use Vec for lists and a"
        );
    }
}
