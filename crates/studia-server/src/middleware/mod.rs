//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides the middleware layers the server runs with:
//! - Observability (request tracing)
//! - Recovery (panic catching, request timeouts)
//! - Security (CORS for the browser frontend)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use axum::Router;
//! use studia_server::middleware::RouterExt;
//!
//! let app: Router = Router::new()
//!     .with_security_layer(&[])
//!     .with_observability_layer()
//!     .with_recovery_layer(Duration::from_secs(30));
//! ```

use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Tracing target for middleware configuration.
const TRACING_TARGET: &str = "studia_server::middleware";

/// Extension trait applying the server's middleware stack to a router.
pub trait RouterExt: Sized {
    /// Adds request tracing spans for every request.
    fn with_observability_layer(self) -> Self;

    /// Adds panic recovery and a total-request timeout.
    ///
    /// Capability invocations expose no cancellation point of their own; the
    /// timeout bounds how long a hung invocation can hold a connection.
    fn with_recovery_layer(self, request_timeout: Duration) -> Self;

    /// Adds CORS headers for browser clients.
    ///
    /// An empty origin list configures a permissive policy suitable for
    /// development.
    fn with_security_layer(self, allowed_origins: &[String]) -> Self;
}

impl RouterExt for Router {
    fn with_observability_layer(self) -> Self {
        self.layer(TraceLayer::new_for_http())
    }

    fn with_recovery_layer(self, request_timeout: Duration) -> Self {
        self.layer(CatchPanicLayer::new())
            .layer(TimeoutLayer::new(request_timeout))
    }

    fn with_security_layer(self, allowed_origins: &[String]) -> Self {
        self.layer(cors_layer(allowed_origins))
    }
}

/// Builds the CORS layer from the configured origins.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        tracing::debug!(
            target: TRACING_TARGET,
            "No CORS origins configured, using a permissive policy"
        );
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    origin = %origin,
                    "Ignoring unparsable CORS origin"
                );
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_compose() {
        let _router: Router = Router::new()
            .with_security_layer(&["https://studia.app".to_string()])
            .with_observability_layer()
            .with_recovery_layer(Duration::from_secs(30));
    }
}
