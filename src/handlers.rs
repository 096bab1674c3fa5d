//! HTTP route handlers for the sharepost service.
//!
//! This module contains all the HTTP route handler functions that process
//! incoming requests and return appropriate responses.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, Json, Redirect},
};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ShareConfig;
use crate::logging::sanitize_for_logging;
use crate::share::share_url_for;

/// Characters of user content included in log lines.
const LOG_PREVIEW_CHARS: usize = 80;

/// Shared state handed to every handler.
pub type AppState = Arc<ShareConfig>;

/// JSON body accepted by `POST /compose`.
#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
    pub content: String,
}

/// Form body accepted by `POST /share`.
#[derive(Debug, Deserialize)]
pub struct ShareForm {
    pub content: String,
}

/// Handles GET requests to the root `/` endpoint.
///
/// Returns a page with a single form: the submitted content is composed into a
/// post and the browser is redirected to the share dialog.
pub async fn handle_root() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sharepost</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            background-color: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 {
            color: #333;
            margin-top: 0;
        }
        textarea {
            width: 100%;
            min-height: 200px;
            box-sizing: border-box;
            padding: 12px;
            font-family: inherit;
        }
        button {
            margin-top: 12px;
            padding: 10px 20px;
            background-color: #1d9bf0;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Share results</h1>
        <form method="post" action="/share" target="_blank">
            <textarea name="content" placeholder="Paste search results (HTML is fine)"></textarea>
            <button type="submit">Post to X</button>
        </form>
    </div>
</body>
</html>"#,
    )
}

/// Handles GET requests to the `/health` endpoint.
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "sharepost"
/// }
/// ```
pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "sharepost"}))
}

/// Handles POST requests to the `/compose` endpoint.
///
/// Composes a post from the submitted content without leaving the page.
///
/// # Success Response
///
/// ```json
/// {
///   "status": "success",
///   "post": "<composed text>",
///   "length": 42,
///   "hashtags": ["#example"],
///   "share_url": "https://twitter.com/intent/tweet?text=..."
/// }
/// ```
///
/// # Error Response
///
/// Empty or whitespace-only content is rejected with 400:
///
/// ```json
/// {
///   "status": "error",
///   "message": "Content must not be empty"
/// }
/// ```
pub async fn handle_compose(
    State(config): State<AppState>,
    Json(request): Json<ComposeRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if request.content.trim().is_empty() {
        warn!("Rejected compose request with empty content");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "error", "message": "Content must not be empty"})),
        ));
    }

    info!(
        "Composing post from content: '{}'",
        sanitize_for_logging(&request.content, LOG_PREVIEW_CHARS)
    );
    let (post, share_url) = share_url_for(&request.content, &config);
    let length = post.char_count();
    info!("Composed post with {} characters", length);

    Ok(Json(json!({
        "status": "success",
        "post": post.text,
        "length": length,
        "hashtags": post.hashtags,
        "share_url": share_url,
    })))
}

/// Handles POST requests to the `/share` endpoint.
///
/// Composes a post from the submitted form content and redirects the browser
/// to the share-intent URL with the post pre-filled.
///
/// # Returns
///
/// - `Ok(Redirect)`: 303 See Other pointing at the share dialog
/// - `Err((StatusCode, String))`: 400 if the content is empty
pub async fn handle_share(
    State(config): State<AppState>,
    Form(form): Form<ShareForm>,
) -> Result<Redirect, (StatusCode, String)> {
    if form.content.trim().is_empty() {
        warn!("Rejected share request with empty content");
        return Err((
            StatusCode::BAD_REQUEST,
            "Content must not be empty".to_string(),
        ));
    }

    info!(
        "Sharing content: '{}'",
        sanitize_for_logging(&form.content, LOG_PREVIEW_CHARS)
    );
    let (post, share_url) = share_url_for(&form.content, &config);
    info!(
        "Redirecting to share dialog with {} character post",
        post.char_count()
    );

    Ok(Redirect::to(&share_url))
}
