//! Post Composition Script
//!
//! This script composes a shareable post from pasted content (HTML is fine)
//! and prints the post together with the share-intent URL that opens it.

use std::io::{self, Read, Write};

use sharepost::{share_url_for, ShareConfig};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("🐦 Post Composition Tool");
    println!("========================");

    let config = ShareConfig::from_env();

    // Read content until EOF so multi-line results can be pasted
    print!("📝 Paste the content to share, then press Ctrl-D: ");
    io::stdout().flush()?;
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;

    if content.trim().is_empty() {
        println!("❌ Content cannot be empty!");
        return Err("Content is required".into());
    }

    let (post, share_url) = share_url_for(&content, &config);

    println!();
    println!("📄 Post: {}", post.text);
    println!(
        "📏 Length: {} characters (max {})",
        post.char_count(),
        config.limits.max_post_chars
    );
    if !post.hashtags.is_empty() {
        println!("🏷️  Hashtags: {}", post.hashtags.join(" "));
    }
    println!("🔗 Share URL: {}", share_url);

    Ok(())
}
