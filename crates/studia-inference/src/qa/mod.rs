//! Extractive question answering types and operations.
//!
//! A question is answered against a caller-supplied context passage; the
//! raw result is a ranked list of candidate answers.

mod request;
mod response;

pub use request::QaRequest;
pub use response::{QaAnswer, QaResponse};

use crate::Result;

/// Provider trait for extractive question answering.
///
/// Implement this trait to create custom question-answering providers.
#[async_trait::async_trait]
pub trait QaProvider: Send + Sync {
    /// Answer a question against the request's context passage.
    async fn answer(&self, request: &QaRequest) -> Result<QaResponse>;
}
