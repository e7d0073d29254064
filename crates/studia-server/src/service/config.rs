//! Application state configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use studia_inference::{GenerationParams, SummaryParams};

/// Default values for configuration options.
mod defaults {
    use std::path::PathBuf;

    /// Spool directory for transient audio artifacts.
    pub fn artifact_dir() -> PathBuf {
        std::env::temp_dir().join("studia-artifacts")
    }

    /// Maximum new tokens for every generation call.
    pub const MAX_NEW_TOKENS: u32 = 256;

    /// Minimum summary length in tokens.
    pub const SUMMARY_MIN_LENGTH: u32 = 25;

    /// Maximum summary length in tokens.
    pub const SUMMARY_MAX_LENGTH: u32 = 50;
}

/// App [`state`] configuration.
///
/// Decoding controls are fixed per deployment, not per request: generation
/// is greedy and bounded, and summaries are decoded within fixed length
/// bounds, so identical requests against identical models produce identical
/// results.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[must_use = "config does nothing unless you use it"]
#[builder(
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate")
)]
pub struct ServiceConfig {
    /// Spool directory for transient audio artifacts.
    #[builder(default = "defaults::artifact_dir()")]
    pub artifact_dir: PathBuf,

    /// Maximum new tokens for every generation call.
    #[builder(default = "defaults::MAX_NEW_TOKENS")]
    pub max_new_tokens: u32,

    /// Minimum summary length in tokens.
    #[builder(default = "defaults::SUMMARY_MIN_LENGTH")]
    pub summary_min_length: u32,

    /// Maximum summary length in tokens.
    #[builder(default = "defaults::SUMMARY_MAX_LENGTH")]
    pub summary_max_length: u32,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Decoding controls applied to every generation call.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            max_new_tokens: self.max_new_tokens,
        }
    }

    /// Length bounds applied to every summarization call.
    pub fn summary_params(&self) -> SummaryParams {
        SummaryParams {
            min_length: self.summary_min_length,
            max_length: self.summary_max_length,
        }
    }
}

impl ServiceConfigBuilder {
    /// Wrapper for builder validation that returns String errors.
    fn validate(builder: &ServiceConfigBuilder) -> Result<(), String> {
        if let Some(max_new_tokens) = &builder.max_new_tokens {
            if *max_new_tokens == 0 {
                return Err("max_new_tokens must be greater than 0".to_string());
            }
            if *max_new_tokens > 4096 {
                return Err("max_new_tokens cannot exceed 4096".to_string());
            }
        }

        if let (Some(min), Some(max)) = (&builder.summary_min_length, &builder.summary_max_length)
            && min >= max
        {
            return Err("summary_min_length must be less than summary_max_length".to_string());
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            artifact_dir: defaults::artifact_dir(),
            max_new_tokens: defaults::MAX_NEW_TOKENS,
            summary_min_length: defaults::SUMMARY_MIN_LENGTH,
            summary_max_length: defaults::SUMMARY_MAX_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ServiceConfig::default();
        assert_eq!(config.summary_params().min_length, 25);
        assert_eq!(config.summary_params().max_length, 50);
        assert_eq!(config.generation_params().max_new_tokens, 256);
    }

    #[test]
    fn builder_rejects_inverted_summary_bounds() {
        let result = ServiceConfig::builder()
            .with_summary_min_length(50u32)
            .with_summary_max_length(25u32)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_unbounded_generation() {
        let result = ServiceConfig::builder().with_max_new_tokens(0u32).build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_applies_defaults() {
        let config = ServiceConfig::builder().build().unwrap();
        assert_eq!(config.max_new_tokens, 256);
    }
}
