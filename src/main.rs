//! # Sharepost
//!
//! A Rust web service that turns marked-up content, such as search results,
//! into posts that fit within X/Twitter's character limit and hands them to
//! the platform's share dialog.
//!
//! ## Environment Variables
//!
//! - `PORT`: Server port (defaults to 3000)
//! - `RUST_LOG`: Log filter for `env_logger`
//! - `SHAREPOST_*`: Composition limits and share endpoint (see [`sharepost::ShareConfig`])
//!
//! ## API Endpoints
//!
//! - `GET /`: Page with a form for sharing content
//! - `GET /health`: Returns service health status
//! - `POST /compose`: Composes a post from JSON content
//! - `POST /share`: Composes a post from form content and redirects to the share dialog

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use log::{error, info};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use sharepost::handlers::{handle_compose, handle_health, handle_root, handle_share};
use sharepost::{get_server_port, ShareConfig};

/// Main entry point for the sharepost web service.
///
/// This function initializes the logging system, loads the share configuration,
/// sets up the HTTP server with all routes, and serves requests until Ctrl-C.
///
/// # Middleware
///
/// - HTTP request tracing
/// - `X-Content-Type-Options: nosniff` on every response
///
/// # Example Usage
///
/// ```bash
/// # Run with default port 3000
/// cargo run
///
/// # Run on a custom port with debug logging
/// PORT=8080 RUST_LOG=debug cargo run
/// ```
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize the logging system
    env_logger::init();

    let config = Arc::new(ShareConfig::from_env());

    // Build the HTTP application with all routes and middleware
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/compose", post(handle_compose))
        .route("/share", post(handle_share))
        .with_state(config)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                )),
        );

    // Get the server port and bind address
    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting sharepost server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
