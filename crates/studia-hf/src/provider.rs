//! Capability trait implementations for the Hugging Face client.

use jiff::Timestamp;
use serde::Deserialize;
use serde_json::json;
use studia_core::Error;
use studia_inference::{
    CapabilityProvider, GenerateProvider, GenerationRequest, GenerationResponse, GeneratorId,
    OcrProvider, OcrRequest, OcrResponse, QaProvider, QaRequest, QaResponse, Result,
    ServiceHealth, SpeechProvider, SpeechRequest, SpeechResponse, SummarizeProvider,
    SummaryRequest, SummaryResponse, TranslateProvider, TranslationRequest, TranslationResponse,
};

use crate::{HfClient, TRACING_TARGET_CLIENT};

/// Answer shape of hosted question-answering models.
#[derive(Debug, Deserialize)]
struct HfQaOutput {
    answer: String,
    score: f32,
}

/// Candidate shape of hosted summarization models.
#[derive(Debug, Deserialize)]
struct HfSummaryOutput {
    summary_text: String,
}

/// Candidate shape of hosted translation models.
#[derive(Debug, Deserialize)]
struct HfTranslationOutput {
    translation_text: String,
}

/// Candidate shape of hosted text-generation and image-to-text models.
#[derive(Debug, Deserialize)]
struct HfGeneratedOutput {
    generated_text: String,
}

#[async_trait::async_trait]
impl QaProvider for HfClient {
    async fn answer(&self, request: &QaRequest) -> Result<QaResponse> {
        let model = &self.config().qa_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            request_id = %request.request_id,
            model = %model,
            "Answering question"
        );

        let payload = json!({
            "inputs": {
                "question": request.question,
                "context": request.context,
            }
        });
        let output: HfQaOutput = self.post_json(model, &payload).await?;

        let ended_at = Timestamp::now();
        Ok(request
            .reply(output.answer, output.score)
            .with_timing(started_at, ended_at))
    }
}

#[async_trait::async_trait]
impl SummarizeProvider for HfClient {
    async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse> {
        let model = &self.config().summarization_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            request_id = %request.request_id,
            model = %model,
            "Summarizing text"
        );

        let payload = json!({
            "inputs": request.text,
            "parameters": {
                "min_length": request.params.min_length,
                "max_length": request.params.max_length,
                "do_sample": false,
            }
        });
        let outputs: Vec<HfSummaryOutput> = self.post_json(model, &payload).await?;
        let summary = first_or_malformed(model, outputs)?.summary_text;

        let ended_at = Timestamp::now();
        Ok(request.reply(summary).with_timing(started_at, ended_at))
    }
}

#[async_trait::async_trait]
impl TranslateProvider for HfClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        let model = &self.config().translation_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            request_id = %request.request_id,
            model = %model,
            "Translating text"
        );

        let payload = json!({ "inputs": request.text });
        let outputs: Vec<HfTranslationOutput> = self.post_json(model, &payload).await?;
        let translation = first_or_malformed(model, outputs)?.translation_text;

        let ended_at = Timestamp::now();
        Ok(request.reply(translation).with_timing(started_at, ended_at))
    }
}

#[async_trait::async_trait]
impl GenerateProvider for HfClient {
    async fn generate(
        &self,
        variant: GeneratorId,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse> {
        let model = self.config().generation_model(variant).to_string();
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            request_id = %request.request_id,
            model = %model,
            variant = %variant,
            prompt_len = request.prompt_length(),
            "Generating text"
        );

        // Greedy, bounded decoding keeps identical prompts reproducible.
        let payload = json!({
            "inputs": request.prompt,
            "parameters": {
                "max_new_tokens": request.params.max_new_tokens,
                "do_sample": false,
                "return_full_text": false,
            }
        });
        let outputs: Vec<HfGeneratedOutput> = self.post_json(&model, &payload).await?;
        let text = first_or_malformed(&model, outputs)?.generated_text;

        let ended_at = Timestamp::now();
        Ok(request.reply(text).with_timing(started_at, ended_at))
    }
}

#[async_trait::async_trait]
impl OcrProvider for HfClient {
    async fn extract_text(&self, request: &OcrRequest) -> Result<OcrResponse> {
        let model = &self.config().ocr_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            request_id = %request.request_id,
            model = %model,
            image_size = request.document_size(),
            content_type = ?request.content_type(),
            "Extracting text from image"
        );

        // The endpoint accepts the raw image body; it decodes any source
        // format to an RGB raster before recognition.
        let payload = bytes::Bytes::copy_from_slice(request.as_bytes());
        let outputs: Vec<HfGeneratedOutput> = self.post_binary(model, payload).await?;
        let text = first_or_malformed(model, outputs)?.generated_text;

        let ended_at = Timestamp::now();
        Ok(request.reply(text).with_timing(started_at, ended_at))
    }
}

#[async_trait::async_trait]
impl SpeechProvider for HfClient {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        let model = &self.config().tts_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            request_id = %request.request_id,
            model = %model,
            text_len = request.text.len(),
            "Synthesizing speech"
        );

        let payload = json!({ "inputs": request.text });
        let (audio, media_type) = self.post_json_for_bytes(model, &payload).await?;
        if audio.is_empty() {
            return Err(Error::external_error()
                .with_message(format!("{model}: synthesis returned no audio")));
        }

        let ended_at = Timestamp::now();
        Ok(request
            .reply(audio, media_type)
            .with_timing(started_at, ended_at))
    }
}

#[async_trait::async_trait]
impl CapabilityProvider for HfClient {
    async fn health_check(&self) -> Result<ServiceHealth> {
        // A config-only check: the hosted endpoint has no cheap ping, and
        // probing a model would spin up its backend.
        Ok(ServiceHealth::healthy())
    }
}

/// Extracts the first candidate, treating an empty list as malformed output.
fn first_or_malformed<T>(model: &str, outputs: Vec<T>) -> Result<T> {
    outputs.into_iter().next().ok_or_else(|| {
        Error::external_error().with_message(format!("{model}: model returned no candidates"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_or_malformed_on_empty() {
        let error = first_or_malformed::<HfGeneratedOutput>("some/model", Vec::new()).unwrap_err();
        assert!(error.to_string().contains("no candidates"));
    }

    #[test]
    fn qa_output_deserializes() {
        let output: HfQaOutput =
            serde_json::from_str(r#"{"score":0.97,"start":0,"end":5,"answer":"Paris"}"#).unwrap();
        assert_eq!(output.answer, "Paris");
        assert!(output.score > 0.9);
    }

    #[test]
    fn generation_output_deserializes_from_list() {
        let outputs: Vec<HfGeneratedOutput> =
            serde_json::from_str(r#"[{"generated_text":"x = 4"}]"#).unwrap();
        assert_eq!(outputs[0].generated_text, "x = 4");
    }
}
