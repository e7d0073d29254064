//! Summarization request types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::response::{SummaryCandidate, SummaryResponse};

/// Decoding bounds for a summarization call.
///
/// Sampling is never enabled; summaries are decoded greedily so identical
/// input produces identical output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummaryParams {
    /// Minimum summary length in tokens.
    pub min_length: u32,
    /// Maximum summary length in tokens.
    pub max_length: u32,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            min_length: 25,
            max_length: 50,
        }
    }
}

/// Request for a single summarization operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The text to summarize.
    pub text: String,
    /// Decoding bounds.
    pub params: SummaryParams,
}

impl SummaryRequest {
    /// Create a new summarization request with default length bounds.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            text: text.into(),
            params: SummaryParams::default(),
        }
    }

    /// Set the decoding bounds.
    pub fn with_params(mut self, params: SummaryParams) -> Self {
        self.params = params;
        self
    }

    /// Create a response for this request with a single candidate summary.
    pub fn reply(&self, summary_text: impl Into<String>) -> SummaryResponse {
        SummaryResponse::new(self.request_id, vec![SummaryCandidate::new(summary_text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let request = SummaryRequest::new("some long text");
        assert_eq!(request.params.min_length, 25);
        assert_eq!(request.params.max_length, 50);
    }
}
