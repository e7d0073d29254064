//! OCR response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timing;

/// A single OCR extraction candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrCandidate {
    /// The extracted text, as produced by the model (untrimmed).
    pub generated_text: String,
}

impl OcrCandidate {
    /// Create a new candidate.
    pub fn new(generated_text: impl Into<String>) -> Self {
        Self {
            generated_text: generated_text.into(),
        }
    }
}

/// Response from a single OCR operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResponse {
    /// Unique identifier for this response.
    pub response_id: Uuid,
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// Extraction candidates, best first.
    pub candidates: Vec<OcrCandidate>,
    /// Timing information for the operation.
    pub timing: Option<Timing>,
}

impl OcrResponse {
    /// Create a new response with the given candidates.
    pub fn new(request_id: Uuid, candidates: Vec<OcrCandidate>) -> Self {
        Self {
            response_id: Uuid::now_v7(),
            request_id,
            candidates,
            timing: None,
        }
    }

    /// Set timing information.
    pub fn with_timing(mut self, started_at: jiff::Timestamp, ended_at: jiff::Timestamp) -> Self {
        self.timing = Some(Timing::new(started_at, ended_at));
        self
    }

    /// The first candidate's text, exactly as the model produced it.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().map(|c| c.generated_text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_preserves_whitespace() {
        let response = OcrResponse::new(Uuid::new_v4(), vec![OcrCandidate::new("  2 + 2  ")]);
        assert_eq!(response.first_text(), Some("  2 + 2  "));
    }
}
