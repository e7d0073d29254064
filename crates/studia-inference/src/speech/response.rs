//! Speech synthesis response types.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timing;

/// Response from a single speech synthesis operation.
///
/// Unlike the text modalities this is not a candidate list: synthesis
/// produces exactly one audio payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechResponse {
    /// Unique identifier for this response.
    pub response_id: Uuid,
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// The synthesized audio bytes.
    pub audio: Bytes,
    /// MIME type of the audio payload (e.g. `audio/mpeg`).
    pub media_type: String,
    /// Timing information for the operation.
    pub timing: Option<Timing>,
}

impl SpeechResponse {
    /// Create a new response with the given audio payload.
    pub fn new(request_id: Uuid, audio: Bytes, media_type: impl Into<String>) -> Self {
        Self {
            response_id: Uuid::now_v7(),
            request_id,
            audio,
            media_type: media_type.into(),
            timing: None,
        }
    }

    /// Set timing information.
    pub fn with_timing(mut self, started_at: jiff::Timestamp, ended_at: jiff::Timestamp) -> Self {
        self.timing = Some(Timing::new(started_at, ended_at));
        self
    }

    /// Audio payload size in bytes.
    pub fn audio_size(&self) -> usize {
        self.audio.len()
    }

    /// Check if the synthesized audio is empty.
    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_response_carries_audio() {
        let response = SpeechResponse::new(Uuid::new_v4(), Bytes::from("RIFF"), "audio/wav");
        assert_eq!(response.audio_size(), 4);
        assert_eq!(response.media_type, "audio/wav");
        assert!(!response.is_empty());
    }
}
