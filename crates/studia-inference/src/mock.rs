//! Mock provider for testing.
//!
//! [`MockProvider`] implements every capability trait with configurable
//! canned outputs, per-modality invocation counters, and failure injection.
//! Handlers under test can assert not only on response contents but also on
//! whether a capability was invoked at all, and with which prompt.
//!
//! # Example
//!
//! ```rust,ignore
//! use studia_inference::mock::MockProvider;
//!
//! let provider = MockProvider::with_text("  1 + 1  ");
//! let capabilities = provider.clone().into_capabilities();
//! // ... exercise the server ...
//! assert_eq!(provider.invocations().ocr, 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use crate::generate::{GenerateProvider, GenerationRequest, GenerationResponse, GeneratorId};
use crate::optical::{OcrProvider, OcrRequest, OcrResponse};
use crate::qa::{QaProvider, QaRequest, QaResponse};
use crate::registry::Capabilities;
use crate::service::CapabilityProvider;
use crate::speech::{SpeechProvider, SpeechRequest, SpeechResponse};
use crate::summarize::{SummarizeProvider, SummaryRequest, SummaryResponse};
use crate::translate::{TranslateProvider, TranslationRequest, TranslationResponse};
use crate::{Error, Result, ServiceHealth};

/// A 44-byte PCM WAV header with zero samples; a minimal playable payload.
const EMPTY_WAV: [u8; 44] = [
    0x52, 0x49, 0x46, 0x46, 0x24, 0x00, 0x00, 0x00, 0x57, 0x41, 0x56, 0x45, 0x66, 0x6d, 0x74,
    0x20, 0x10, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x40, 0x1f, 0x00, 0x00, 0x80, 0x3e,
    0x00, 0x00, 0x02, 0x00, 0x10, 0x00, 0x64, 0x61, 0x74, 0x61, 0x00, 0x00, 0x00, 0x00,
];

/// Configuration for the mock provider.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Canned answer for question-answering requests.
    pub mock_answer: String,
    /// Canned summary for summarization requests.
    pub mock_summary: String,
    /// Canned translation for translation requests.
    pub mock_translation: String,
    /// Canned extracted text for OCR requests.
    pub mock_text: String,
    /// Canned generated text for generation requests.
    pub mock_output: String,
    /// Canned audio payload for speech synthesis requests.
    pub mock_audio: Bytes,
    /// When set, every capability call fails with this message.
    pub fail_with: Option<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            mock_answer: "Paris".to_string(),
            mock_summary: "A concise summary.".to_string(),
            mock_translation: "Olá, mundo.".to_string(),
            mock_text: "2 + 2".to_string(),
            mock_output: "The answer is 4.".to_string(),
            mock_audio: Bytes::from_static(&EMPTY_WAV),
            fail_with: None,
        }
    }
}

/// Snapshot of per-modality invocation counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockInvocations {
    /// Question-answering invocations.
    pub qa: usize,
    /// Summarization invocations.
    pub summarization: usize,
    /// Translation invocations.
    pub translation: usize,
    /// Generation invocations (all variants).
    pub generation: usize,
    /// OCR invocations.
    pub ocr: usize,
    /// Speech synthesis invocations.
    pub speech: usize,
}

impl MockInvocations {
    /// Total invocations across every modality.
    pub fn total(&self) -> usize {
        self.qa + self.summarization + self.translation + self.generation + self.ocr + self.speech
    }
}

#[derive(Debug, Default)]
struct MockState {
    qa: AtomicUsize,
    summarization: AtomicUsize,
    translation: AtomicUsize,
    generation: AtomicUsize,
    ocr: AtomicUsize,
    speech: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

/// Deterministic provider for testing.
///
/// Clones share counters and configuration, so a test can keep one handle
/// while the registry owns another.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    config: Arc<MockConfig>,
    state: Arc<MockState>,
}

impl MockProvider {
    /// Creates a new mock provider with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        Self {
            config: Arc::new(config),
            state: Arc::new(MockState::default()),
        }
    }

    /// Creates a provider returning the given OCR text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(MockConfig {
            mock_text: text.into(),
            ..Default::default()
        })
    }

    /// Creates a provider returning the given generated text.
    pub fn with_output(output: impl Into<String>) -> Self {
        Self::new(MockConfig {
            mock_output: output.into(),
            ..Default::default()
        })
    }

    /// Creates a provider whose every capability call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockConfig {
            fail_with: Some(message.into()),
            ..Default::default()
        })
    }

    /// Builds a [`Capabilities`] registry backed by this provider.
    pub fn into_capabilities(self) -> Capabilities {
        Capabilities::from_provider(self)
    }

    /// Snapshot of per-modality invocation counts.
    pub fn invocations(&self) -> MockInvocations {
        MockInvocations {
            qa: self.state.qa.load(Ordering::SeqCst),
            summarization: self.state.summarization.load(Ordering::SeqCst),
            translation: self.state.translation.load(Ordering::SeqCst),
            generation: self.state.generation.load(Ordering::SeqCst),
            ocr: self.state.ocr.load(Ordering::SeqCst),
            speech: self.state.speech.load(Ordering::SeqCst),
        }
    }

    /// Prompts seen by the generation capability, in invocation order.
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.state.prompts.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<()> {
        match &self.config.fail_with {
            Some(message) => Err(Error::external_error().with_message(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl QaProvider for MockProvider {
    async fn answer(&self, request: &QaRequest) -> Result<QaResponse> {
        self.state.qa.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(request.reply(self.config.mock_answer.clone(), 0.98))
    }
}

#[async_trait::async_trait]
impl SummarizeProvider for MockProvider {
    async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse> {
        self.state.summarization.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(request.reply(self.config.mock_summary.clone()))
    }
}

#[async_trait::async_trait]
impl TranslateProvider for MockProvider {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        self.state.translation.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(request.reply(self.config.mock_translation.clone()))
    }
}

#[async_trait::async_trait]
impl GenerateProvider for MockProvider {
    async fn generate(
        &self,
        _variant: GeneratorId,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse> {
        self.state.generation.fetch_add(1, Ordering::SeqCst);
        self.state
            .prompts
            .lock()
            .unwrap()
            .push(request.prompt.clone());
        self.check_failure()?;
        Ok(request.reply(self.config.mock_output.clone()))
    }
}

#[async_trait::async_trait]
impl OcrProvider for MockProvider {
    async fn extract_text(&self, request: &OcrRequest) -> Result<OcrResponse> {
        self.state.ocr.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(request.reply(self.config.mock_text.clone()))
    }
}

#[async_trait::async_trait]
impl SpeechProvider for MockProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        self.state.speech.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(request.reply(self.config.mock_audio.clone(), "audio/wav"))
    }
}

#[async_trait::async_trait]
impl CapabilityProvider for MockProvider {
    async fn health_check(&self) -> Result<ServiceHealth> {
        match &self.config.fail_with {
            Some(message) => Ok(ServiceHealth::unhealthy(message.clone())),
            None => Ok(ServiceHealth::healthy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counters_track_invocations() {
        let provider = MockProvider::default();
        let request = QaRequest::new("q", "c");
        provider.answer(&request).await.unwrap();
        provider.answer(&request).await.unwrap();

        let invocations = provider.invocations();
        assert_eq!(invocations.qa, 2);
        assert_eq!(invocations.total(), 2);
    }

    #[tokio::test]
    async fn failure_injection() {
        let provider = MockProvider::failing("model exploded");
        let request = SummaryRequest::new("text");
        let error = provider.summarize(&request).await.unwrap_err();
        assert!(error.to_string().contains("model exploded"));
        assert_eq!(provider.invocations().summarization, 1);
    }

    #[tokio::test]
    async fn generation_records_prompts() {
        let provider = MockProvider::default();
        let request = GenerationRequest::new("solve 2 + 2");
        provider
            .generate(GeneratorId::Math, &request)
            .await
            .unwrap();
        assert_eq!(provider.recorded_prompts(), vec!["solve 2 + 2"]);
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_output() {
        let provider = MockProvider::default();
        let first = provider.summarize(&SummaryRequest::new("text")).await.unwrap();
        let second = provider.summarize(&SummaryRequest::new("text")).await.unwrap();
        assert_eq!(first.first_summary(), second.first_summary());
    }
}
