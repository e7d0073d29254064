//! Error types for HTTP handlers.
//!
//! The HTTP error type and its conversions implement the API's single
//! failure contract: every failure, whether raised by request validation or
//! by a capability invocation, becomes the uniform `{"error": ...}` body
//! with the appropriate status classification.

mod capability_error;
mod http_error;
mod service_error;

pub use http_error::{Error, ErrorKind, Result};
