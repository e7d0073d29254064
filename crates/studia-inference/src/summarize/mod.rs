//! Abstractive summarization types and operations.

mod request;
mod response;

pub use request::{SummaryParams, SummaryRequest};
pub use response::{SummaryCandidate, SummaryResponse};

use crate::Result;

/// Provider trait for abstractive summarization.
#[async_trait::async_trait]
pub trait SummarizeProvider: Send + Sync {
    /// Summarize the request's text within the request's length bounds.
    async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse>;
}
