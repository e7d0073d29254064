//! Single-field text request types.

use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /summarize`.
#[derive(Debug, Clone, Deserialize, Validate, JsonSchema)]
pub struct SummarizeText {
    /// The text to summarize.
    #[validate(length(min = 1, message = "Provide text to summarize"))]
    pub text: String,
}

/// Request body for `POST /translate`.
#[derive(Debug, Clone, Deserialize, Validate, JsonSchema)]
pub struct TranslateText {
    /// The text to translate.
    #[validate(length(min = 1, message = "Provide text to translate"))]
    pub text: String,
}

/// Request body for `POST /tts`.
#[derive(Debug, Clone, Deserialize, Validate, JsonSchema)]
pub struct SynthesizeText {
    /// The text to synthesize.
    #[validate(length(min = 1, message = "Provide text for TTS"))]
    pub text: String,
}

/// Request body for `POST /solve-text-model`.
#[derive(Debug, Clone, Deserialize, Validate, JsonSchema)]
pub struct SolveTextProblem {
    /// The typed math problem.
    #[validate(length(min = 1, message = "Provide a math problem"))]
    pub problem: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_fails_validation() {
        let request = SummarizeText {
            text: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn non_empty_text_passes_validation() {
        let request = TranslateText {
            text: "hello".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
