#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod connect;
mod error;
mod provider;

pub use connect::{HfClient, HfConfig};
pub use error::HfError;

/// Tracing target for Hugging Face client operations.
pub const TRACING_TARGET_CLIENT: &str = "studia_hf::client";
