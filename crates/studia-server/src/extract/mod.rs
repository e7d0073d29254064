//! Enhanced HTTP request extractors with improved error handling.
//!
//! This module provides custom Axum extractors that replace their standard
//! counterparts while converting every rejection into the API's uniform
//! error body:
//!
//! - [`Json`] - JSON deserialization with detailed error messages
//! - [`ValidateJson`] - JSON extraction with automatic validation
//! - [`Multipart`] - multipart extraction with proper error responses

pub mod reject;

pub use crate::extract::reject::{Json, Multipart, ValidateJson};
