//! Per-modality service wrappers with observability.
//!
//! Each wrapper holds a shared provider handle and adds structured logging
//! around the invocation: a debug event on entry and success, an error event
//! on failure. Wrappers never retry and never alter the provider's result.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use crate::generate::{GenerateProvider, GenerationRequest, GenerationResponse, GeneratorId};
use crate::optical::{OcrProvider, OcrRequest, OcrResponse};
use crate::qa::{QaProvider, QaRequest, QaResponse};
use crate::speech::{SpeechProvider, SpeechRequest, SpeechResponse};
use crate::summarize::{SummarizeProvider, SummaryRequest, SummaryResponse};
use crate::translate::{TranslateProvider, TranslationRequest, TranslationResponse};
use crate::{Result, TRACING_TARGET};

macro_rules! impl_debug {
    ($($t:ident),+) => {$(
        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($t)).finish_non_exhaustive()
            }
        }
    )+};
}

impl_debug!(
    QaService,
    SummarizeService,
    TranslateService,
    GenerationService,
    OcrService,
    SpeechService
);

/// Question-answering service with observability.
#[derive(Clone)]
pub struct QaService {
    provider: Arc<dyn QaProvider>,
}

impl QaService {
    /// Create a new service from a provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: QaProvider + 'static,
    {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a new service from a shared provider handle.
    pub fn from_shared(provider: Arc<dyn QaProvider>) -> Self {
        Self { provider }
    }

    /// Answer a question against the request's context.
    pub async fn answer(&self, request: &QaRequest) -> Result<QaResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            question_len = request.question_length(),
            "Processing question-answering request"
        );

        let result = self.provider.answer(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    response_id = %response.response_id,
                    candidates = response.answers.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Question answered"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Question answering failed"
                );
            }
        }

        result
    }
}

/// Summarization service with observability.
#[derive(Clone)]
pub struct SummarizeService {
    provider: Arc<dyn SummarizeProvider>,
}

impl SummarizeService {
    /// Create a new service from a provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: SummarizeProvider + 'static,
    {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a new service from a shared provider handle.
    pub fn from_shared(provider: Arc<dyn SummarizeProvider>) -> Self {
        Self { provider }
    }

    /// Summarize the request's text.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            text_len = request.text.len(),
            "Processing summarization request"
        );

        let result = self.provider.summarize(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    response_id = %response.response_id,
                    candidates = response.candidates.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Summarization successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Summarization failed"
                );
            }
        }

        result
    }
}

/// Translation service with observability.
#[derive(Clone)]
pub struct TranslateService {
    provider: Arc<dyn TranslateProvider>,
}

impl TranslateService {
    /// Create a new service from a provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: TranslateProvider + 'static,
    {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a new service from a shared provider handle.
    pub fn from_shared(provider: Arc<dyn TranslateProvider>) -> Self {
        Self { provider }
    }

    /// Translate the request's text.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            text_len = request.text.len(),
            "Processing translation request"
        );

        let result = self.provider.translate(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    response_id = %response.response_id,
                    candidates = response.candidates.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Translation successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Translation failed"
                );
            }
        }

        result
    }
}

/// Text generation service bound to one model variant.
#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn GenerateProvider>,
    variant: GeneratorId,
}

impl GenerationService {
    /// Create a new service from a provider, bound to the given variant.
    pub fn new<P>(provider: P, variant: GeneratorId) -> Self
    where
        P: GenerateProvider + 'static,
    {
        Self::from_shared(Arc::new(provider), variant)
    }

    /// Create a new service from a shared provider handle.
    pub fn from_shared(provider: Arc<dyn GenerateProvider>, variant: GeneratorId) -> Self {
        Self { provider, variant }
    }

    /// The model variant this service is bound to.
    pub fn variant(&self) -> GeneratorId {
        self.variant
    }

    /// Generate text from the request's prompt.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            variant = %self.variant,
            prompt_len = request.prompt_length(),
            "Processing generation request"
        );

        let result = self.provider.generate(self.variant, request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    response_id = %response.response_id,
                    variant = %self.variant,
                    candidates = response.candidates.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Generation successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    variant = %self.variant,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Generation failed"
                );
            }
        }

        result
    }
}

/// OCR service with observability.
#[derive(Clone)]
pub struct OcrService {
    provider: Arc<dyn OcrProvider>,
}

impl OcrService {
    /// Create a new service from a provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: OcrProvider + 'static,
    {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a new service from a shared provider handle.
    pub fn from_shared(provider: Arc<dyn OcrProvider>) -> Self {
        Self { provider }
    }

    /// Extract text from the request's document.
    pub async fn extract_text(&self, request: &OcrRequest) -> Result<OcrResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            document_size = request.document_size(),
            content_type = ?request.content_type(),
            "Processing OCR request"
        );

        let result = self.provider.extract_text(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    response_id = %response.response_id,
                    text_len = response.first_text().map(str::len).unwrap_or_default(),
                    elapsed_ms = elapsed.as_millis(),
                    "OCR processing successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "OCR processing failed"
                );
            }
        }

        result
    }
}

/// Speech synthesis service with observability.
#[derive(Clone)]
pub struct SpeechService {
    provider: Arc<dyn SpeechProvider>,
}

impl SpeechService {
    /// Create a new service from a provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: SpeechProvider + 'static,
    {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a new service from a shared provider handle.
    pub fn from_shared(provider: Arc<dyn SpeechProvider>) -> Self {
        Self { provider }
    }

    /// Synthesize the request's text into audio.
    pub async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            text_len = request.text.len(),
            "Processing speech synthesis request"
        );

        let result = self.provider.synthesize(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    response_id = %response.response_id,
                    audio_size = response.audio_size(),
                    media_type = %response.media_type,
                    elapsed_ms = elapsed.as_millis(),
                    "Speech synthesis successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Speech synthesis failed"
                );
            }
        }

        result
    }
}
