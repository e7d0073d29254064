//! Hugging Face client configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use studia_inference::GeneratorId;

/// Default values for configuration options.
mod defaults {
    /// Hosted inference endpoint.
    pub const ENDPOINT: &str = "https://api-inference.huggingface.co";

    /// Extractive question-answering model.
    pub const QA_MODEL: &str = "distilbert-base-cased-distilled-squad";

    /// Abstractive summarization model.
    pub const SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";

    /// English-to-Portuguese translation model.
    pub const TRANSLATION_MODEL: &str = "Helsinki-NLP/opus-mt-en-pt";

    /// Printed-text OCR model.
    pub const OCR_MODEL: &str = "microsoft/trocr-base-printed";

    /// General-purpose chat model.
    pub const CHAT_MODEL: &str = "deepseek-ai/deepseek-llm-7b-chat";

    /// Math-specialized solver model.
    pub const MATH_MODEL: &str = "Qwen/Qwen2.5-Math-7B-Instruct";

    /// Phi-family math solver model.
    pub const MATH_PHI_MODEL: &str = "microsoft/phi-2";

    /// English speech synthesis model.
    pub const TTS_MODEL: &str = "facebook/mms-tts-eng";

    /// Request timeout in seconds.
    pub const TIMEOUT_SECS: u64 = 120;
}

/// Configuration for the Hugging Face client.
///
/// One hosted model per capability; every option can be overridden through
/// CLI arguments or environment variables when the `config` feature is
/// enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct HfConfig {
    /// Base URL of the hosted inference endpoint.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "hf-endpoint",
            env = "HF_ENDPOINT",
            default_value = defaults::ENDPOINT
        )
    )]
    #[serde(default = "default_endpoint")]
    pub hf_endpoint: String,

    /// API token; anonymous requests are rate-limited but allowed.
    #[cfg_attr(feature = "config", arg(long = "hf-api-token", env = "HF_API_TOKEN"))]
    #[serde(default)]
    pub hf_api_token: Option<String>,

    /// Question-answering model id.
    #[cfg_attr(
        feature = "config",
        arg(long = "hf-qa-model", env = "HF_QA_MODEL", default_value = defaults::QA_MODEL)
    )]
    #[serde(default = "default_qa_model")]
    pub qa_model: String,

    /// Summarization model id.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "hf-summarization-model",
            env = "HF_SUMMARIZATION_MODEL",
            default_value = defaults::SUMMARIZATION_MODEL
        )
    )]
    #[serde(default = "default_summarization_model")]
    pub summarization_model: String,

    /// Translation model id (fixed English-to-Portuguese direction).
    #[cfg_attr(
        feature = "config",
        arg(
            long = "hf-translation-model",
            env = "HF_TRANSLATION_MODEL",
            default_value = defaults::TRANSLATION_MODEL
        )
    )]
    #[serde(default = "default_translation_model")]
    pub translation_model: String,

    /// OCR (image-to-text) model id.
    #[cfg_attr(
        feature = "config",
        arg(long = "hf-ocr-model", env = "HF_OCR_MODEL", default_value = defaults::OCR_MODEL)
    )]
    #[serde(default = "default_ocr_model")]
    pub ocr_model: String,

    /// Chat generation model id.
    #[cfg_attr(
        feature = "config",
        arg(long = "hf-chat-model", env = "HF_CHAT_MODEL", default_value = defaults::CHAT_MODEL)
    )]
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Math generation model id.
    #[cfg_attr(
        feature = "config",
        arg(long = "hf-math-model", env = "HF_MATH_MODEL", default_value = defaults::MATH_MODEL)
    )]
    #[serde(default = "default_math_model")]
    pub math_model: String,

    /// Phi-family math generation model id.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "hf-math-phi-model",
            env = "HF_MATH_PHI_MODEL",
            default_value = defaults::MATH_PHI_MODEL
        )
    )]
    #[serde(default = "default_math_phi_model")]
    pub math_phi_model: String,

    /// Speech synthesis model id.
    #[cfg_attr(
        feature = "config",
        arg(long = "hf-tts-model", env = "HF_TTS_MODEL", default_value = defaults::TTS_MODEL)
    )]
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Request timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "hf-timeout", env = "HF_TIMEOUT", default_value_t = defaults::TIMEOUT_SECS)
    )]
    #[serde(default = "default_timeout_secs")]
    pub hf_timeout: u64,
}

fn default_endpoint() -> String {
    defaults::ENDPOINT.to_string()
}

fn default_qa_model() -> String {
    defaults::QA_MODEL.to_string()
}

fn default_summarization_model() -> String {
    defaults::SUMMARIZATION_MODEL.to_string()
}

fn default_translation_model() -> String {
    defaults::TRANSLATION_MODEL.to_string()
}

fn default_ocr_model() -> String {
    defaults::OCR_MODEL.to_string()
}

fn default_chat_model() -> String {
    defaults::CHAT_MODEL.to_string()
}

fn default_math_model() -> String {
    defaults::MATH_MODEL.to_string()
}

fn default_math_phi_model() -> String {
    defaults::MATH_PHI_MODEL.to_string()
}

fn default_tts_model() -> String {
    defaults::TTS_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    defaults::TIMEOUT_SECS
}

impl Default for HfConfig {
    fn default() -> Self {
        Self {
            hf_endpoint: default_endpoint(),
            hf_api_token: None,
            qa_model: default_qa_model(),
            summarization_model: default_summarization_model(),
            translation_model: default_translation_model(),
            ocr_model: default_ocr_model(),
            chat_model: default_chat_model(),
            math_model: default_math_model(),
            math_phi_model: default_math_phi_model(),
            tts_model: default_tts_model(),
            hf_timeout: default_timeout_secs(),
        }
    }
}

impl HfConfig {
    /// Set the API token.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.hf_api_token = Some(token.into());
        self
    }

    /// Set the endpoint base URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.hf_endpoint = endpoint.into();
        self
    }

    /// The model id registered for the given generation variant.
    pub fn generation_model(&self, variant: GeneratorId) -> &str {
        match variant {
            GeneratorId::Chat => &self.chat_model,
            GeneratorId::Math => &self.math_model,
            GeneratorId::MathPhi => &self.math_phi_model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = HfConfig::default();
        assert_eq!(config.hf_endpoint, "https://api-inference.huggingface.co");
        assert_eq!(config.translation_model, "Helsinki-NLP/opus-mt-en-pt");
        assert!(config.hf_api_token.is_none());
    }

    #[test]
    fn generation_model_per_variant() {
        let config = HfConfig::default();
        assert_eq!(
            config.generation_model(GeneratorId::MathPhi),
            "microsoft/phi-2"
        );
        assert_ne!(
            config.generation_model(GeneratorId::Chat),
            config.generation_model(GeneratorId::Math)
        );
    }
}
