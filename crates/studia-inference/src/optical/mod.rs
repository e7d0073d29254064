//! Optical character recognition (OCR) types and operations.
//!
//! Text is extracted from an uploaded image; the raw result is a list of
//! generated-text candidates, the same shape a captioning model produces.

mod request;
mod response;

pub use request::OcrRequest;
pub use response::{OcrCandidate, OcrResponse};

use crate::Result;

/// Provider trait for OCR text extraction.
#[async_trait::async_trait]
pub trait OcrProvider: Send + Sync {
    /// Extract text from the request's document.
    async fn extract_text(&self, request: &OcrRequest) -> Result<OcrResponse>;
}
