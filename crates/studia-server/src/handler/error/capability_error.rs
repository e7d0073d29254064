//! Conversion of capability-boundary errors into HTTP errors.
//!
//! Validation failures never reach this conversion; anything a capability
//! raises maps to a server error carrying the failure's message. An
//! `UnknownCapability` here means an endpoint asked for a generator variant
//! that was never registered, which is a wiring bug rather than a client
//! mistake.

use studia_core::ErrorKind as CapabilityErrorKind;

use crate::handler::{Error, ErrorKind};

impl From<studia_core::Error> for Error<'static> {
    fn from(error: studia_core::Error) -> Self {
        let message = error
            .message
            .clone()
            .unwrap_or_else(|| error.to_string());

        let kind = match error.kind() {
            CapabilityErrorKind::InvalidInput => ErrorKind::BadRequest,
            CapabilityErrorKind::ExternalError
            | CapabilityErrorKind::InternalError
            | CapabilityErrorKind::UnknownCapability
            | CapabilityErrorKind::Timeout
            | CapabilityErrorKind::Serialization => ErrorKind::InternalServerError,
        };

        kind.with_message(message)
            .with_context(error.kind_str())
            .into_static()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn capability_failure_maps_to_server_error() {
        let source = studia_core::Error::external_error().with_message("model exploded");
        let error: Error<'static> = source.into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.message(), Some("model exploded"));
        assert_eq!(error.kind().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_input_maps_to_client_error() {
        let source = studia_core::Error::invalid_input().with_message("text must not be empty");
        let error: Error<'static> = source.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn unknown_capability_maps_to_server_error() {
        let source = studia_core::Error::unknown_capability();
        let error: Error<'static> = source.into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.context(), Some("unknown_capability"));
    }
}
