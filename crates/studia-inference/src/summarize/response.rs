//! Summarization response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timing;

/// A single candidate summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryCandidate {
    /// The generated summary text.
    pub summary_text: String,
}

impl SummaryCandidate {
    /// Create a new candidate summary.
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
        }
    }
}

/// Response from a single summarization operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Unique identifier for this response.
    pub response_id: Uuid,
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// Candidate summaries, best first.
    pub candidates: Vec<SummaryCandidate>,
    /// Timing information for the operation.
    pub timing: Option<Timing>,
}

impl SummaryResponse {
    /// Create a new response with the given candidates.
    pub fn new(request_id: Uuid, candidates: Vec<SummaryCandidate>) -> Self {
        Self {
            response_id: Uuid::now_v7(),
            request_id,
            candidates,
            timing: None,
        }
    }

    /// Set timing information.
    pub fn with_timing(mut self, started_at: jiff::Timestamp, ended_at: jiff::Timestamp) -> Self {
        self.timing = Some(Timing::new(started_at, ended_at));
        self
    }

    /// The first candidate's summary text, if any candidate was returned.
    pub fn first_summary(&self) -> Option<&str> {
        self.candidates.first().map(|c| c.summary_text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_summary() {
        let response = SummaryResponse::new(
            Uuid::new_v4(),
            vec![SummaryCandidate::new("A condensed version.")],
        );
        assert_eq!(response.first_summary(), Some("A condensed version."));
    }
}
