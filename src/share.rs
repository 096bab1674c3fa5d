//! Share-intent URL construction.
//!
//! Posting happens in the user's browser: the composed text is handed to the
//! platform's intent endpoint as a percent-encoded `text` query parameter.

use crate::composer::{compose_post_with, ComposedPost};
use crate::config::ShareConfig;

/// Intent endpoint used when no other base is configured.
pub const DEFAULT_SHARE_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Builds a share-intent URL carrying `text`.
///
/// # Parameters
///
/// - `base`: The intent endpoint, without a query string
/// - `text`: The post text to pre-fill
///
/// # Example
///
/// ```rust
/// use sharepost::{build_share_intent_url, DEFAULT_SHARE_INTENT_BASE};
///
/// let url = build_share_intent_url(DEFAULT_SHARE_INTENT_BASE, "Hello #rust");
/// assert_eq!(url, "https://twitter.com/intent/tweet?text=Hello%20%23rust");
/// ```
pub fn build_share_intent_url(base: &str, text: &str) -> String {
    format!("{}?text={}", base, urlencoding::encode(text))
}

/// Composes a post from raw content and builds its share-intent URL.
///
/// # Returns
///
/// The composed post together with the URL that opens it in the share dialog.
pub fn share_url_for(raw_content: &str, config: &ShareConfig) -> (ComposedPost, String) {
    let post = compose_post_with(raw_content, &config.limits);
    let url = build_share_intent_url(&config.intent_base, &post.text);
    (post, url)
}
