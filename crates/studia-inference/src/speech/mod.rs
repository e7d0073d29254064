//! Speech synthesis (text-to-speech) types and operations.

mod request;
mod response;

pub use request::SpeechRequest;
pub use response::SpeechResponse;

use crate::Result;

/// Provider trait for speech synthesis.
#[async_trait::async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize the request's text into playable audio.
    ///
    /// The returned audio is fully materialized; there is no streaming
    /// synthesis at this boundary.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse>;
}
