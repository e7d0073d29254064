//! Speech synthesis request types.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::response::SpeechResponse;

/// Request for a single speech synthesis operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The text to synthesize.
    pub text: String,
}

impl SpeechRequest {
    /// Create a new speech synthesis request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            text: text.into(),
        }
    }

    /// Create a response for this request with the given audio payload.
    pub fn reply(&self, audio: Bytes, media_type: impl Into<String>) -> SpeechResponse {
        SpeechResponse::new(self.request_id, audio, media_type)
    }
}
