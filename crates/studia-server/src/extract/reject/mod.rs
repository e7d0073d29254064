//! Extractors that replace axum's default rejections.

mod enhanced_json;
mod enhanced_multipart;
mod validated_json;

pub use enhanced_json::Json;
pub use enhanced_multipart::Multipart;
pub use validated_json::ValidateJson;
