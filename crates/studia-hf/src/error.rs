//! Client construction errors.

use thiserror::Error;

/// Errors raised while building the Hugging Face client.
///
/// Runtime inference failures are reported through the capability
/// boundary's own error type, not this one.
#[derive(Debug, Error)]
pub enum HfError {
    /// The configured endpoint is not a valid HTTP(S) URL.
    #[error("invalid Hugging Face endpoint: {0}")]
    InvalidEndpoint(String),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Http(#[from] reqwest::Error),
}
