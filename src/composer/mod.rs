//! Post composition.
//!
//! This module turns arbitrary marked-up content, typically a search result,
//! into a single post that fits the sharing platform's character budget.
//! Every operation is a pure function of its input and never fails.

mod hashtags;
mod markup;
mod summary;

use log::debug;

pub use hashtags::{derive_hashtags, render_hashtags};
pub use markup::strip_markup;
pub use summary::{summarize, truncate_chars};

/// Maximum characters the sharing platform accepts in one post.
pub const DEFAULT_MAX_POST_CHARS: usize = 280;
/// Bodies longer than this are cut down before hashtags are added.
pub const DEFAULT_SUMMARY_SOFT_LIMIT: usize = 250;
/// Characters kept from an over-long body, before the ellipsis.
pub const DEFAULT_SUMMARY_CUT: usize = 230;
pub const DEFAULT_MAX_SENTENCES: usize = 3;
pub const DEFAULT_MAX_HASHTAGS: usize = 3;

const ELLIPSIS: &str = "...";

/// Numeric policy applied by [`compose_post_with`].
///
/// `max_post_chars` is the only hard budget: the composed post never exceeds
/// it. The soft limit and cut only decide when and how far the body is
/// shortened before hashtags are appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeLimits {
    pub max_post_chars: usize,
    pub summary_soft_limit: usize,
    pub summary_cut: usize,
    pub max_sentences: usize,
    pub max_hashtags: usize,
}

impl Default for ComposeLimits {
    fn default() -> Self {
        ComposeLimits {
            max_post_chars: DEFAULT_MAX_POST_CHARS,
            summary_soft_limit: DEFAULT_SUMMARY_SOFT_LIMIT,
            summary_cut: DEFAULT_SUMMARY_CUT,
            max_sentences: DEFAULT_MAX_SENTENCES,
            max_hashtags: DEFAULT_MAX_HASHTAGS,
        }
    }
}

impl ComposeLimits {
    /// Checks that the limits can be honoured together.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: If the limits are consistent
    /// - `Err(...)`: If the longest possible body plus the separating space
    ///   could not fit the post budget, the cut exceeds the soft limit, or no
    ///   sentences are allowed
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.max_sentences == 0 {
            return Err("max_sentences must be at least 1".into());
        }
        if self.summary_cut > self.summary_soft_limit {
            return Err(format!(
                "summary_cut ({}) must not exceed summary_soft_limit ({})",
                self.summary_cut, self.summary_soft_limit
            )
            .into());
        }
        // The separator space always follows the body, even without hashtags
        let longest_body = self
            .summary_soft_limit
            .max(self.summary_cut + ELLIPSIS.len());
        if longest_body + 1 > self.max_post_chars {
            return Err(format!(
                "a body of up to {} characters plus separator does not fit max_post_chars ({})",
                longest_body, self.max_post_chars
            )
            .into());
        }
        Ok(())
    }
}

/// A post ready to be shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPost {
    /// The final text: body, a space, then the (possibly clipped) hashtags
    pub text: String,
    /// The summarized body the hashtags were derived from
    pub body: String,
    /// Hashtags derived from the body, before any clipping
    pub hashtags: Vec<String>,
}

impl ComposedPost {
    /// Length of the final text in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Composes a post from raw content using the default limits.
///
/// # Example
///
/// ```rust
/// use sharepost::compose_post;
///
/// let post = compose_post("<p>Rust makes systems programming approachable.</p>");
/// assert_eq!(
///     post,
///     "Rust makes systems programming approachable. #Rust #makes #systems"
/// );
/// ```
pub fn compose_post(raw_content: &str) -> String {
    compose_post_with(raw_content, &ComposeLimits::default()).text
}

/// Composes a post from raw content under the given limits.
///
/// The pipeline strips markup, keeps the first few sentences, shortens an
/// over-long body to `summary_cut` characters plus `"..."`, derives hashtags
/// from the body and appends them. When the result would exceed
/// `max_post_chars`, the hashtag string is clipped to the space left after the
/// body and the separating space.
///
/// Empty input produces a post consisting of a single space.
pub fn compose_post_with(raw_content: &str, limits: &ComposeLimits) -> ComposedPost {
    let plain = strip_markup(raw_content);
    let summary = summarize(&plain, limits.max_sentences);

    let summary_chars = summary.chars().count();
    let body = if summary_chars > limits.summary_soft_limit {
        debug!(
            "Summary has {} characters, cutting to {}",
            summary_chars, limits.summary_cut
        );
        format!("{}{}", truncate_chars(&summary, limits.summary_cut), ELLIPSIS)
    } else {
        summary
    };

    let hashtags = derive_hashtags(&body, limits.max_hashtags);
    let rendered = render_hashtags(&hashtags);

    let body_chars = body.chars().count();
    let text = if body_chars + 1 + rendered.chars().count() <= limits.max_post_chars {
        format!("{} {}", body, rendered)
    } else {
        let available = limits.max_post_chars.saturating_sub(body_chars + 1);
        debug!(
            "Post exceeds {} characters, clipping hashtags to {}",
            limits.max_post_chars, available
        );
        format!("{} {}", body, truncate_chars(&rendered, available))
    };

    ComposedPost {
        text,
        body,
        hashtags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_post_example() {
        let post =
            compose_post("<p>AI is amazing. It learns. It adapts. It predicts. It scales.</p>");
        assert_eq!(
            post,
            "AI is amazing. It learns. It adapts. #amazing #learns #adapts"
        );
    }

    #[test]
    fn test_compose_post_empty_input() {
        assert_eq!(compose_post(""), " ");
        assert_eq!(compose_post("<p></p>"), " ");
    }

    #[test]
    fn test_compose_post_without_keywords() {
        assert_eq!(compose_post("A b c."), "A b c. ");
    }

    #[test]
    fn test_compose_post_truncates_long_body() {
        let sentence = "word ".repeat(60);
        let composed = compose_post_with(&sentence, &ComposeLimits::default());

        assert_eq!(composed.body.chars().count(), DEFAULT_SUMMARY_CUT + 3);
        assert!(composed.body.ends_with("..."));
        assert_eq!(composed.hashtags, vec!["#word", "#word", "#word"]);
        assert!(composed.char_count() <= DEFAULT_MAX_POST_CHARS);
    }

    #[test]
    fn test_compose_post_body_at_soft_limit_is_kept() {
        let body = "a".repeat(DEFAULT_SUMMARY_SOFT_LIMIT);
        let composed = compose_post_with(&body, &ComposeLimits::default());
        assert_eq!(composed.body, body);
        assert!(composed.char_count() <= DEFAULT_MAX_POST_CHARS);
    }

    #[test]
    fn test_compose_post_clips_hashtags_to_budget() {
        // 240 characters of body leave 39 for hashtags after the separator
        let long_word = "x".repeat(30);
        let filler = "ab ".repeat(50);
        let input = format!(
            "{} {} {} {}",
            long_word,
            long_word,
            long_word,
            &filler[..240 - 3 * 31]
        );
        let composed = compose_post_with(&input, &ComposeLimits::default());

        assert_eq!(composed.body.chars().count(), 240);
        assert_eq!(composed.hashtags.len(), 3);
        assert_eq!(composed.char_count(), DEFAULT_MAX_POST_CHARS);
        assert!(composed.text.starts_with(&composed.body));
    }

    #[test]
    fn test_compose_post_never_exceeds_budget() {
        let inputs = [
            "Supercalifragilistic expialidocious antidisestablishmentarianism. ".repeat(10),
            "<b>Ünïcödé</b> wörds everywhere and more words. ".repeat(20),
            "🦀🦀🦀🦀 ".repeat(100),
            format!("{} {}", "z".repeat(249), "y".repeat(80)),
            "tiny".to_string(),
        ];

        for input in &inputs {
            let composed = compose_post_with(input, &ComposeLimits::default());
            assert!(
                composed.char_count() <= DEFAULT_MAX_POST_CHARS,
                "{} chars for input {:?}",
                composed.char_count(),
                input
            );
        }
    }

    #[test]
    fn test_compose_post_custom_limits() {
        let limits = ComposeLimits {
            max_post_chars: 40,
            summary_soft_limit: 30,
            summary_cut: 20,
            max_sentences: 1,
            max_hashtags: 1,
        };
        let composed = compose_post_with(
            "Composable pipelines everywhere today. Second sentence here.",
            &limits,
        );

        assert_eq!(composed.body, "Composable pipelines...");
        assert_eq!(composed.text, "Composable pipelines... #Composable");
    }

    #[test]
    fn test_limits_validation() {
        assert!(ComposeLimits::default().validate().is_ok());

        let no_sentences = ComposeLimits {
            max_sentences: 0,
            ..ComposeLimits::default()
        };
        assert!(no_sentences.validate().is_err());

        let cut_above_soft = ComposeLimits {
            summary_cut: 260,
            ..ComposeLimits::default()
        };
        assert!(cut_above_soft.validate().is_err());

        let cut_too_long = ComposeLimits {
            max_post_chars: 100,
            ..ComposeLimits::default()
        };
        assert!(cut_too_long.validate().is_err());

        let soft_limit_fills_budget = ComposeLimits {
            summary_soft_limit: 280,
            ..ComposeLimits::default()
        };
        assert!(soft_limit_fills_budget.validate().is_err());

        let soft_limit_leaves_separator = ComposeLimits {
            summary_soft_limit: 279,
            ..ComposeLimits::default()
        };
        assert!(soft_limit_leaves_separator.validate().is_ok());
    }

    #[test]
    fn test_validated_limits_keep_posts_within_budget() {
        let limits = ComposeLimits {
            summary_soft_limit: 279,
            ..ComposeLimits::default()
        };
        assert!(limits.validate().is_ok());

        let composed = compose_post_with(&"a".repeat(279), &limits);
        assert_eq!(composed.body.chars().count(), 279);
        assert_eq!(composed.char_count(), DEFAULT_MAX_POST_CHARS);
    }
}
