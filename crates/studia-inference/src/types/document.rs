//! Binary document payloads for image-based capabilities.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A binary document (typically an uploaded image) passed to a capability.
///
/// The payload is carried as raw bytes; the consuming capability decodes it
/// as an RGB raster image regardless of the source format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Raw document bytes.
    data: Bytes,
    /// MIME content type, if known (e.g. `image/png`).
    content_type: Option<String>,
    /// Original file name, if the document came from an upload.
    file_name: Option<String>,
}

impl Document {
    /// Create a new document from raw bytes.
    pub fn new(data: Bytes) -> Self {
        Self {
            data,
            content_type: None,
            file_name: None,
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the original file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Get the document bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the content type, if known.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get the original file name, if known.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Get the document size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_creation() {
        let document = Document::new(Bytes::from("image data"))
            .with_content_type("image/png")
            .with_file_name("equation.png");
        assert_eq!(document.content_type(), Some("image/png"));
        assert_eq!(document.file_name(), Some("equation.png"));
        assert_eq!(document.size(), 10);
        assert!(!document.is_empty());
    }
}
