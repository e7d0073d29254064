//! OCR request types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::response::{OcrCandidate, OcrResponse};
use crate::types::Document;

/// Request for a single OCR operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The document to process for text extraction.
    pub document: Document,
}

impl OcrRequest {
    /// Create a new OCR request with the given document.
    pub fn new(document: Document) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            document,
        }
    }

    /// Get the document's content type.
    pub fn content_type(&self) -> Option<&str> {
        self.document.content_type()
    }

    /// Get the document size in bytes.
    pub fn document_size(&self) -> usize {
        self.document.size()
    }

    /// Get the document bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.document.as_bytes()
    }

    /// Create a response for this request with a single candidate.
    pub fn reply(&self, generated_text: impl Into<String>) -> OcrResponse {
        OcrResponse::new(self.request_id, vec![OcrCandidate::new(generated_text)])
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn ocr_request_creation() {
        let document = Document::new(Bytes::from("png bytes")).with_content_type("image/png");
        let request = OcrRequest::new(document);
        assert!(!request.request_id.is_nil());
        assert_eq!(request.content_type(), Some("image/png"));
        assert_eq!(request.document_size(), 9);
    }
}
