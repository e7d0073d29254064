//! Translation response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timing;

/// A single candidate translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationCandidate {
    /// The translated text.
    pub translation_text: String,
}

impl TranslationCandidate {
    /// Create a new candidate translation.
    pub fn new(translation_text: impl Into<String>) -> Self {
        Self {
            translation_text: translation_text.into(),
        }
    }
}

/// Response from a single translation operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Unique identifier for this response.
    pub response_id: Uuid,
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// Candidate translations, best first.
    pub candidates: Vec<TranslationCandidate>,
    /// Timing information for the operation.
    pub timing: Option<Timing>,
}

impl TranslationResponse {
    /// Create a new response with the given candidates.
    pub fn new(request_id: Uuid, candidates: Vec<TranslationCandidate>) -> Self {
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

    /// The first candidate's translated text, if any candidate was returned.
    pub fn first_translation(&self) -> Option<&str> {
        self.candidates.first().map(|c| c.translation_text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_translation() {
        let response = TranslationResponse::new(
            Uuid::new_v4(),
            vec![TranslationCandidate::new("Olá, mundo")],
        );
        assert_eq!(response.first_translation(), Some("Olá, mundo"));
    }
}
