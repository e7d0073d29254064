//! Service configuration flags.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};
use studia_server::service::ServiceConfig;

/// Service configuration group.
///
/// These flags feed the server's [`ServiceConfig`]; bounds left unset fall
/// back to the deployment defaults (greedy generation capped at 256 new
/// tokens, summaries between 25 and 50 tokens).
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct ServiceOptions {
    /// Spool directory for transient audio artifacts.
    #[arg(long, env = "ARTIFACT_DIR")]
    pub artifact_dir: Option<PathBuf>,

    /// Maximum new tokens for every generation call.
    #[arg(long, env = "MAX_NEW_TOKENS")]
    pub max_new_tokens: Option<u32>,

    /// Minimum summary length in tokens.
    #[arg(long, env = "SUMMARY_MIN_LENGTH")]
    pub summary_min_length: Option<u32>,

    /// Maximum summary length in tokens.
    #[arg(long, env = "SUMMARY_MAX_LENGTH")]
    pub summary_max_length: Option<u32>,
}

impl ServiceOptions {
    /// Builds the validated service configuration.
    pub fn into_config(self) -> anyhow::Result<ServiceConfig> {
        let mut builder = ServiceConfig::builder();

        if let Some(artifact_dir) = self.artifact_dir {
            builder = builder.with_artifact_dir(artifact_dir);
        }
        if let Some(max_new_tokens) = self.max_new_tokens {
            builder = builder.with_max_new_tokens(max_new_tokens);
        }
        if let Some(summary_min_length) = self.summary_min_length {
            builder = builder.with_summary_min_length(summary_min_length);
        }
        if let Some(summary_max_length) = self.summary_max_length {
            builder = builder.with_summary_max_length(summary_max_length);
        }

        builder.build().context("invalid service configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_options_fall_back_to_defaults() {
        let options = ServiceOptions {
            artifact_dir: None,
            max_new_tokens: None,
            summary_min_length: None,
            summary_max_length: None,
        };
        let config = options.into_config().unwrap();
        assert_eq!(config.max_new_tokens, 256);
    }

    #[test]
    fn inverted_summary_bounds_are_rejected() {
        let options = ServiceOptions {
            artifact_dir: None,
            max_new_tokens: None,
            summary_min_length: Some(60),
            summary_max_length: Some(50),
        };
        assert!(options.into_config().is_err());
    }
}
