use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;

/// HTTP error response representation.
///
/// Every failure this API reports serializes to the same single-field
/// body, `{"error": <message>}`; the status code carries the
/// classification.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// Client-visible error message
    pub error: Cow<'a, str>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    #[schemars(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "The request could not be processed due to missing or invalid data",
        StatusCode::BAD_REQUEST,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const NOT_FOUND: Self = Self::new(
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(error: &'a str, status: StatusCode) -> Self {
        Self {
            error: Cow::Borrowed(error),
            status,
        }
    }

    /// Replaces the error message.
    pub fn with_error(mut self, error: impl Into<Cow<'a, str>>) -> Self {
        self.error = error.into();
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_single_field() {
        let response = ErrorResponse::BAD_REQUEST.with_error("Provide text to summarize");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "Provide text to summarize");
        // The status code travels in the HTTP response, never in the body.
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[test]
    fn const_responses_have_matching_statuses() {
        assert_eq!(ErrorResponse::BAD_REQUEST.status, StatusCode::BAD_REQUEST);
        assert_eq!(ErrorResponse::NOT_FOUND.status, StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorResponse::INTERNAL_SERVER_ERROR.status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
