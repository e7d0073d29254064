//! Machine translation types and operations.
//!
//! The translation direction is fixed by the underlying model
//! (English to Portuguese in the default deployment); requests carry no
//! per-call direction.

mod request;
mod response;

pub use request::TranslationRequest;
pub use response::{TranslationCandidate, TranslationResponse};

use crate::Result;

/// Provider trait for machine translation.
#[async_trait::async_trait]
pub trait TranslateProvider: Send + Sync {
    /// Translate the request's text.
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse>;
}
