//! Text generation request types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::response::{GeneratedText, GenerationResponse};

/// Decoding controls for a generation call.
///
/// Sampling is disabled; decoding is greedy and bounded so identical input
/// against identical model state yields identical output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum number of new tokens to generate.
    pub max_new_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 256,
        }
    }
}

/// Request for a single text generation operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The prompt to generate from.
    pub prompt: String,
    /// Decoding controls.
    pub params: GenerationParams,
}

impl GenerationRequest {
    /// Create a new generation request with default decoding controls.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            prompt: prompt.into(),
            params: GenerationParams::default(),
        }
    }

    /// Set the decoding controls.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Get the prompt length in characters.
    pub fn prompt_length(&self) -> usize {
        self.prompt.chars().count()
    }

    /// Create a response for this request with a single candidate.
    pub fn reply(&self, generated_text: impl Into<String>) -> GenerationResponse {
        GenerationResponse::new(self.request_id, vec![GeneratedText::new(generated_text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_bounded() {
        let request = GenerationRequest::new("2 + 2 = ?");
        assert_eq!(request.params.max_new_tokens, 256);
    }
}
