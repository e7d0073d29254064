//! Question answering request types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::response::{QaAnswer, QaResponse};

/// Request for a single question-answering operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The question to answer.
    pub question: String,
    /// The context passage the answer is extracted from.
    pub context: String,
}

impl QaRequest {
    /// Create a new question-answering request.
    pub fn new(question: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            question: question.into(),
            context: context.into(),
        }
    }

    /// Get the question length in characters.
    pub fn question_length(&self) -> usize {
        self.question.chars().count()
    }

    /// Create a response for this request with a single candidate answer.
    pub fn reply(&self, answer: impl Into<String>, score: f32) -> QaResponse {
        QaResponse::new(self.request_id, vec![QaAnswer::new(answer, score)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qa_request_creation() {
        let request = QaRequest::new("What is the capital?", "Paris is the capital of France.");
        assert!(!request.request_id.is_nil());
        assert_eq!(request.question, "What is the capital?");
    }

    #[test]
    fn reply_carries_request_id() {
        let request = QaRequest::new("Q", "C");
        let response = request.reply("Paris", 0.98);
        assert_eq!(response.request_id, request.request_id);
        assert_eq!(response.first_answer(), Some("Paris"));
    }
}
