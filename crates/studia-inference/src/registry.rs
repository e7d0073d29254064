//! Capability registry for dependency injection.
//!
//! [`Capabilities`] holds one service handle per inference modality. It is
//! constructed exactly once at startup from a provider implementing every
//! capability trait, is read-only afterwards, and is injected by handle into
//! the request-handling path. Cloning is cheap (all services share `Arc`
//! internals).

use std::collections::HashMap;
use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::generate::GeneratorId;
use crate::service::{
    CapabilityProvider, GenerationService, OcrService, QaService, SpeechService, SummarizeService,
    TranslateService,
};
use crate::{Error, Result, ServiceHealth};

/// Container for every inference capability.
///
/// The five fixed modalities are typed fields; generation variants are a
/// keyed lookup because the endpoint decides at request time which model
/// variant runs.
#[derive(Clone)]
pub struct Capabilities {
    qa: QaService,
    summarization: SummarizeService,
    translation: TranslateService,
    optical: OcrService,
    speech: SpeechService,
    generators: HashMap<GeneratorId, GenerationService>,
    provider: Arc<dyn CapabilityProvider>,
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("generators", &self.generators.len())
            .finish_non_exhaustive()
    }
}

impl Capabilities {
    /// Builds the registry from a single provider backing every modality.
    ///
    /// Every generation variant in [`GeneratorId`] is registered; the
    /// registry never changes after this call returns.
    pub fn from_provider<P>(provider: P) -> Self
    where
        P: CapabilityProvider + 'static,
    {
        let provider: Arc<P> = Arc::new(provider);

        let generators = GeneratorId::iter()
            .map(|variant| {
                (
                    variant,
                    GenerationService::from_shared(provider.clone(), variant),
                )
            })
            .collect();

        Self {
            qa: QaService::from_shared(provider.clone()),
            summarization: SummarizeService::from_shared(provider.clone()),
            translation: TranslateService::from_shared(provider.clone()),
            optical: OcrService::from_shared(provider.clone()),
            speech: SpeechService::from_shared(provider.clone()),
            generators,
            provider,
        }
    }

    /// Question-answering capability.
    pub fn qa(&self) -> &QaService {
        &self.qa
    }

    /// Summarization capability.
    pub fn summarization(&self) -> &SummarizeService {
        &self.summarization
    }

    /// Translation capability.
    pub fn translation(&self) -> &TranslateService {
        &self.translation
    }

    /// OCR capability.
    pub fn optical(&self) -> &OcrService {
        &self.optical
    }

    /// Speech synthesis capability.
    pub fn speech(&self) -> &SpeechService {
        &self.speech
    }

    /// Looks up a generation variant.
    ///
    /// Fails with [`ErrorKind::UnknownCapability`] if the variant was never
    /// registered. With the fixed set registered in [`Self::from_provider`]
    /// this is unreachable from correctly wired endpoints; seeing it at
    /// runtime indicates a programming error.
    ///
    /// [`ErrorKind::UnknownCapability`]: crate::ErrorKind::UnknownCapability
    pub fn generator(&self, variant: GeneratorId) -> Result<&GenerationService> {
        self.generators.get(&variant).ok_or_else(|| {
            Error::unknown_capability()
                .with_message(format!("no generator registered for variant '{variant}'"))
        })
    }

    /// Health check against the underlying provider.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.provider.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::mock::MockProvider;

    #[test]
    fn all_generator_variants_are_registered() {
        let capabilities = MockProvider::default().into_capabilities();
        for variant in GeneratorId::iter() {
            assert!(capabilities.generator(variant).is_ok());
        }
    }

    #[tokio::test]
    async fn registry_routes_to_provider() {
        let capabilities = MockProvider::default().into_capabilities();
        let request = crate::QaRequest::new("question", "context");
        let response = capabilities.qa().answer(&request).await.unwrap();
        assert!(response.first_answer().is_some());
    }
}
