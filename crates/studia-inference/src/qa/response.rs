//! Question answering response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timing;

/// A single candidate answer with its confidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaAnswer {
    /// The extracted answer text.
    pub answer: String,
    /// Confidence score in the range 0.0..=1.0.
    pub score: f32,
}

impl QaAnswer {
    /// Create a new candidate answer.
    pub fn new(answer: impl Into<String>, score: f32) -> Self {
        Self {
            answer: answer.into(),
            score,
        }
    }
}

/// Response from a single question-answering operation.
///
/// Candidates are ordered best-first; callers normally only read the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResponse {
    /// Unique identifier for this response.
    pub response_id: Uuid,
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// Candidate answers, best first.
    pub answers: Vec<QaAnswer>,
    /// Timing information for the operation.
    pub timing: Option<Timing>,
}

impl QaResponse {
    /// Create a new response with the given candidate answers.
    pub fn new(request_id: Uuid, answers: Vec<QaAnswer>) -> Self {
        Self {
            response_id: Uuid::now_v7(),
            request_id,
            answers,
            timing: None,
        }
    }

    /// Set timing information.
    pub fn with_timing(mut self, started_at: jiff::Timestamp, ended_at: jiff::Timestamp) -> Self {
        self.timing = Some(Timing::new(started_at, ended_at));
        self
    }

    /// The best candidate's answer text, if any candidate was returned.
    pub fn first_answer(&self) -> Option<&str> {
        self.answers.first().map(|a| a.answer.as_str())
    }

    /// Check if the response carries no candidates.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_answer_is_best_candidate() {
        let response = QaResponse::new(
            Uuid::new_v4(),
            vec![QaAnswer::new("Paris", 0.97), QaAnswer::new("France", 0.02)],
        );
        assert_eq!(response.first_answer(), Some("Paris"));
        assert!(!response.is_empty());
    }

    #[test]
    fn empty_response() {
        let response = QaResponse::new(Uuid::new_v4(), Vec::new());
        assert!(response.first_answer().is_none());
        assert!(response.is_empty());
    }
}
