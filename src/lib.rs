//! # Sharepost Library
//!
//! Composes shareable posts from marked-up content such as search results.
//! The composer strips markup, keeps the first few sentences, derives hashtags
//! and bounds the result to the platform's 280-character budget. The share
//! module turns the post into a share-intent URL.
//!
//! ## Features
//!
//! - Markup stripping with HTML entity decoding
//! - Sentence-based summarization and hashtag derivation
//! - Length-bounded post assembly
//! - Share-intent URL construction
//! - HTTP handlers for composing and sharing
//!
//! ## Configuration
//!
//! Composition limits and the share endpoint are read from `SHAREPOST_*`
//! environment variables (see [`ShareConfig::from_env`]). `PORT` selects the
//! server port (defaults to 3000).
//!
//! ## Example
//!
//! ```rust
//! use sharepost::compose_post;
//!
//! let post = compose_post("<p>AI is amazing. It learns. It adapts. It predicts.</p>");
//! assert_eq!(post, "AI is amazing. It learns. It adapts. #amazing #learns #adapts");
//! ```

pub mod composer;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod share;

// Re-export commonly used types and functions
pub use composer::{
    compose_post, compose_post_with, derive_hashtags, render_hashtags, strip_markup, summarize,
    ComposeLimits, ComposedPost,
};
pub use config::{get_server_port, ShareConfig};
pub use share::{build_share_intent_url, share_url_for, DEFAULT_SHARE_INTENT_BASE};
