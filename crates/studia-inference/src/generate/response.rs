//! Text generation response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timing;

/// A single generated-text candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedText {
    /// The generated text.
    pub generated_text: String,
}

impl GeneratedText {
    /// Create a new candidate.
    pub fn new(generated_text: impl Into<String>) -> Self {
        Self {
            generated_text: generated_text.into(),
        }
    }
}

/// Response from a single text generation operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Unique identifier for this response.
    pub response_id: Uuid,
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// Generated-text candidates, best first.
    pub candidates: Vec<GeneratedText>,
    /// Timing information for the operation.
    pub timing: Option<Timing>,
}

impl GenerationResponse {
    /// Create a new response with the given candidates.
    pub fn new(request_id: Uuid, candidates: Vec<GeneratedText>) -> Self {
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

    /// The first candidate's generated text, if any candidate was returned.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().map(|c| c.generated_text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_is_first_candidate() {
        let response = GenerationResponse::new(
            Uuid::new_v4(),
            vec![GeneratedText::new("x = 4"), GeneratedText::new("x = 5")],
        );
        assert_eq!(response.first_text(), Some("x = 4"));
    }
}
