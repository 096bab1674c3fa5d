//! Configuration module for the sharepost service.
//!
//! This module contains configuration structures and environment variable handling
//! for post composition and the share-intent endpoint.

use log::{error, info, warn};
use std::env;

use crate::composer::ComposeLimits;
use crate::share::DEFAULT_SHARE_INTENT_BASE;

pub const MAX_POST_CHARS_VAR: &str = "SHAREPOST_MAX_POST_CHARS";
pub const SUMMARY_SOFT_LIMIT_VAR: &str = "SHAREPOST_SUMMARY_SOFT_LIMIT";
pub const SUMMARY_CUT_VAR: &str = "SHAREPOST_SUMMARY_CUT";
pub const MAX_SENTENCES_VAR: &str = "SHAREPOST_MAX_SENTENCES";
pub const MAX_HASHTAGS_VAR: &str = "SHAREPOST_MAX_HASHTAGS";
pub const INTENT_BASE_VAR: &str = "SHAREPOST_INTENT_BASE";

/// Configuration for composing and sharing posts.
///
/// Holds the composition limits and the share-intent endpoint the composed
/// text is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Limits applied by the composer
    pub limits: ComposeLimits,
    /// Share-intent endpoint, without a query string
    pub intent_base: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            limits: ComposeLimits::default(),
            intent_base: DEFAULT_SHARE_INTENT_BASE.to_string(),
        }
    }
}

impl ShareConfig {
    /// Creates a new `ShareConfig` from environment variables.
    ///
    /// # Optional Environment Variables
    ///
    /// - `SHAREPOST_MAX_POST_CHARS`: Hard budget for a composed post (default 280)
    /// - `SHAREPOST_SUMMARY_SOFT_LIMIT`: Body length that triggers truncation (default 250)
    /// - `SHAREPOST_SUMMARY_CUT`: Characters kept from a truncated body (default 230)
    /// - `SHAREPOST_MAX_SENTENCES`: Sentences kept by the summary (default 3)
    /// - `SHAREPOST_MAX_HASHTAGS`: Hashtags appended to a post (default 3)
    /// - `SHAREPOST_INTENT_BASE`: Share-intent endpoint (default `https://twitter.com/intent/tweet`)
    ///
    /// Unparsable values are logged and replaced by their defaults. If the
    /// resulting limits are inconsistent, the default limits are used instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sharepost::ShareConfig;
    ///
    /// let config = ShareConfig::from_env();
    /// assert!(config.limits.validate().is_ok());
    /// ```
    pub fn from_env() -> Self {
        info!("Loading share configuration from environment variables");
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `lookup` returns the raw value of a variable, or `None` when unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ComposeLimits::default();
        let limits = ComposeLimits {
            max_post_chars: read_usize(&lookup, MAX_POST_CHARS_VAR, defaults.max_post_chars),
            summary_soft_limit: read_usize(
                &lookup,
                SUMMARY_SOFT_LIMIT_VAR,
                defaults.summary_soft_limit,
            ),
            summary_cut: read_usize(&lookup, SUMMARY_CUT_VAR, defaults.summary_cut),
            max_sentences: read_usize(&lookup, MAX_SENTENCES_VAR, defaults.max_sentences),
            max_hashtags: read_usize(&lookup, MAX_HASHTAGS_VAR, defaults.max_hashtags),
        };

        let limits = match limits.validate() {
            Ok(()) => limits,
            Err(e) => {
                error!("Invalid composition limits: {}", e);
                warn!("Falling back to default composition limits");
                defaults
            }
        };

        let intent_base = match lookup(INTENT_BASE_VAR) {
            Some(base) if is_valid_intent_base(base.trim()) => {
                let base = base.trim().trim_end_matches('?').to_string();
                info!("Using share intent endpoint from {}: {}", INTENT_BASE_VAR, base);
                base
            }
            Some(base) => {
                warn!(
                    "Ignoring {}='{}', using default share intent endpoint",
                    INTENT_BASE_VAR, base
                );
                DEFAULT_SHARE_INTENT_BASE.to_string()
            }
            None => DEFAULT_SHARE_INTENT_BASE.to_string(),
        };

        info!(
            "Share configuration loaded: max {} characters, {} sentences, {} hashtags",
            limits.max_post_chars, limits.max_sentences, limits.max_hashtags
        );

        ShareConfig {
            limits,
            intent_base,
        }
    }
}

/// An intent base must be non-empty printable ASCII so it can be sent as a
/// redirect location.
fn is_valid_intent_base(base: &str) -> bool {
    !base.is_empty() && base.chars().all(|c| c.is_ascii_graphic())
}

/// Reads a non-negative integer variable, falling back to `default`.
fn read_usize<F>(lookup: &F, name: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(value) => {
                info!("Found {} = {}", name, value);
                value
            }
            Err(e) => {
                warn!(
                    "Ignoring {}='{}' ({}), using default {}",
                    name, raw, e, default
                );
                default
            }
        },
        None => default,
    }
}

/// Gets the server port from environment variables or returns the default.
///
/// This function reads the `PORT` environment variable and parses it as a u16.
/// If the environment variable is not set, it defaults to 3000.
///
/// # Panics
///
/// This function will panic if the `PORT` environment variable is set to a value
/// that cannot be parsed as a valid port number.
///
/// # Example
///
/// ```rust
/// use sharepost::get_server_port;
///
/// // With no PORT set
/// let port = get_server_port(); // Returns 3000
/// ```
pub fn get_server_port() -> u16 {
    env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a valid number")
}
