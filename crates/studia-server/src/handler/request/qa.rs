//! Question-answering request types.

use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /qa`.
///
/// Both fields are required; the capability extracts the answer to
/// `question` from the `context` passage.
#[derive(Debug, Clone, Deserialize, Validate, JsonSchema)]
pub struct AskQuestion {
    /// The context passage to answer from.
    #[validate(length(min = 1, message = "Provide context and question"))]
    pub context: String,
    /// The question to answer.
    #[validate(length(min = 1, message = "Provide context and question"))]
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_fields() {
        let missing_question = AskQuestion {
            context: "Paris is the capital of France.".to_string(),
            question: String::new(),
        };
        assert!(missing_question.validate().is_err());

        let missing_context = AskQuestion {
            context: String::new(),
            question: "What is the capital?".to_string(),
        };
        assert!(missing_context.validate().is_err());
    }
}
