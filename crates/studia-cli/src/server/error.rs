//! Server lifecycle errors.

use std::io;

use thiserror::Error;

/// Result type alias for server lifecycle operations.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Errors raised while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The server configuration failed validation.
    #[error("invalid server configuration: {0}")]
    InvalidConfig(String),

    /// The listener could not bind to the configured address.
    #[error("failed to bind to {address}")]
    BindError {
        /// The address that could not be bound.
        address: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The server failed while handling connections.
    #[error("server runtime error")]
    Runtime(#[source] io::Error),
}
