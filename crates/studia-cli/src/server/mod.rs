//! HTTP server startup with lifecycle management.
//!
//! This module provides a clean API for starting the HTTP server with
//! enhanced error handling and graceful shutdown.

mod error;
mod http_server;
mod shutdown;

use axum::Router;
pub use error::{Result, ServerError};
use http_server::serve_http;

use crate::config::ServerConfig;

/// Starts the HTTP server with graceful shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> Result<()> {
    serve_http(app, config).await
}
