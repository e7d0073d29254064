//! Translation request types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::response::{TranslationCandidate, TranslationResponse};

/// Request for a single translation operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The text to translate.
    pub text: String,
}

impl TranslationRequest {
    /// Create a new translation request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            text: text.into(),
        }
    }

    /// Create a response for this request with a single candidate translation.
    pub fn reply(&self, translation_text: impl Into<String>) -> TranslationResponse {
        TranslationResponse::new(
            self.request_id,
            vec![TranslationCandidate::new(translation_text)],
        )
    }
}
