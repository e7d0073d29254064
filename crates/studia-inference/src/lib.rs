#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod generate;
mod optical;
mod qa;
mod registry;
mod service;
mod speech;
mod summarize;
mod translate;
pub mod types;

pub mod mock;

// Re-export commonly used items at crate root for convenience
pub use generate::{
    GenerateProvider, GeneratedText, GenerationParams, GenerationRequest, GenerationResponse,
    GeneratorId,
};
pub use optical::{OcrCandidate, OcrProvider, OcrRequest, OcrResponse};
pub use qa::{QaAnswer, QaProvider, QaRequest, QaResponse};
pub use registry::Capabilities;
pub use service::{
    CapabilityProvider, GenerationService, OcrService, QaService, SpeechService,
    SummarizeService, TranslateService,
};
pub use speech::{SpeechProvider, SpeechRequest, SpeechResponse};
pub use studia_core::{Error, ErrorKind, Result, ServiceHealth, ServiceStatus};
pub use summarize::{SummaryCandidate, SummaryParams, SummaryRequest, SummaryResponse, SummarizeProvider};
pub use translate::{TranslateProvider, TranslationCandidate, TranslationRequest, TranslationResponse};

/// Tracing target for inference operations.
pub const TRACING_TARGET: &str = "studia_inference";
