//! Success envelope types, one per endpoint family.

use schemars::JsonSchema;
use serde::Serialize;
use studia_inference::{
    GenerationResponse, OcrResponse, QaResponse, SummaryResponse, TranslationResponse,
};

use crate::handler::{ErrorKind, Result};

/// Answer to a question-answering request.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Answer {
    /// The best candidate's answer text.
    pub answer: String,
}

impl Answer {
    /// Extracts the envelope from the capability's raw response.
    pub fn from_response(response: QaResponse) -> Result<Self> {
        let answer = first_candidate(response.first_answer(), "question answering")?;
        Ok(Self { answer })
    }
}

/// Summary of a summarization request.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Summary {
    /// The first candidate's summary text.
    pub summary: String,
}

impl Summary {
    /// Extracts the envelope from the capability's raw response.
    pub fn from_response(response: SummaryResponse) -> Result<Self> {
        let summary = first_candidate(response.first_summary(), "summarization")?;
        Ok(Self { summary })
    }
}

/// Translation of a translation request.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Translation {
    /// The first candidate's translated text.
    pub translation: String,
}

impl Translation {
    /// Extracts the envelope from the capability's raw response.
    pub fn from_response(response: TranslationResponse) -> Result<Self> {
        let translation = first_candidate(response.first_translation(), "translation")?;
        Ok(Self { translation })
    }
}

/// Text recognized by a standalone OCR request.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ExtractedText {
    /// The recognized text, trimmed of surrounding whitespace.
    pub text: String,
}

impl ExtractedText {
    /// Extracts the envelope from the capability's raw response.
    pub fn from_response(response: OcrResponse) -> Result<Self> {
        let text = first_candidate(response.first_text(), "text extraction")?;
        Ok(Self {
            text: text.trim().to_string(),
        })
    }
}

/// A solved math problem: the recognized (or typed) problem statement and
/// the generator's solution, passed through unverified.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Solution {
    /// The problem statement the solver worked on.
    pub problem: String,
    /// The generated solution text.
    pub solution: String,
}

impl From<crate::pipeline::SolvedProblem> for Solution {
    fn from(solved: crate::pipeline::SolvedProblem) -> Self {
        Self {
            problem: solved.problem,
            solution: solved.solution,
        }
    }
}

/// Reply of the chat assistant.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ChatReply {
    /// The combined prompt the generator received.
    pub input: String,
    /// The first candidate's generated text.
    pub output: String,
}

impl ChatReply {
    /// Builds the envelope from the combined prompt and the generation
    /// capability's raw response.
    pub fn from_response(input: impl Into<String>, response: GenerationResponse) -> Result<Self> {
        let output = first_candidate(response.first_text(), "chat generation")?;
        Ok(Self {
            input: input.into(),
            output,
        })
    }
}

/// Monitoring status body.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct HealthStatus {
    /// Current provider status (`healthy`, `degraded`, `unhealthy`).
    pub status: String,
}

/// A capability that returns no candidates produced malformed output;
/// that is a capability failure, not a client mistake.
fn first_candidate(candidate: Option<&str>, capability: &str) -> Result<String> {
    candidate.map(str::to_string).ok_or_else(|| {
        ErrorKind::InternalServerError
            .with_message(format!("{capability} returned no candidates"))
            .into_static()
    })
}

#[cfg(test)]
mod tests {
    use studia_inference::{OcrCandidate, QaAnswer};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn answer_extracts_first_candidate() {
        let response = QaResponse::new(
            Uuid::new_v4(),
            vec![QaAnswer::new("Paris", 0.97), QaAnswer::new("Lyon", 0.01)],
        );
        let envelope = Answer::from_response(response).unwrap();
        assert_eq!(envelope.answer, "Paris");
    }

    #[test]
    fn extracted_text_is_trimmed() {
        let response = OcrResponse::new(Uuid::new_v4(), vec![OcrCandidate::new("  2 + 2 = ?\n")]);
        let envelope = ExtractedText::from_response(response).unwrap();
        assert_eq!(envelope.text, "2 + 2 = ?");
    }

    #[test]
    fn empty_candidates_are_a_server_error() {
        let response = QaResponse::new(Uuid::new_v4(), Vec::new());
        let error = Answer::from_response(response).unwrap_err();
        assert_eq!(error.kind(), crate::handler::ErrorKind::InternalServerError);
    }

    #[test]
    fn solution_retains_problem() {
        let solved = crate::pipeline::SolvedProblem {
            problem: "2x = 8".to_string(),
            solution: "x = 4".to_string(),
        };
        let envelope = Solution::from(solved);
        assert_eq!(envelope.problem, "2x = 8");
        assert_eq!(envelope.solution, "x = 4");
    }
}
