//! Hugging Face client module.
//!
//! This module provides the main client interface for the hosted inference
//! endpoints, along with its configuration type.

mod client;
mod config;

pub use client::HfClient;
pub use config::HfConfig;
