//! Service layer for inference operations.
//!
//! This module provides the core service infrastructure:
//! - [`CapabilityProvider`] - Unified trait covering every inference modality
//! - Per-modality service wrappers adding structured observability

mod capability;

pub use capability::{
    GenerationService, OcrService, QaService, SpeechService, SummarizeService, TranslateService,
};

use crate::generate::GenerateProvider;
use crate::optical::OcrProvider;
use crate::qa::QaProvider;
use crate::speech::SpeechProvider;
use crate::summarize::SummarizeProvider;
use crate::translate::TranslateProvider;
use crate::{Result, ServiceHealth};

/// Unified trait for inference providers.
///
/// This trait combines every per-modality provider trait. Implement it to
/// create a provider that can back the whole [`Capabilities`] registry.
///
/// [`Capabilities`]: crate::Capabilities
#[async_trait::async_trait]
pub trait CapabilityProvider:
    QaProvider
    + SummarizeProvider
    + TranslateProvider
    + GenerateProvider
    + OcrProvider
    + SpeechProvider
{
    /// Perform a health check on the underlying inference backend.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
