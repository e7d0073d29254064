//! Conversion of service-layer errors into HTTP errors.
//!
//! Service-layer failures (artifact spool I/O, configuration) are always
//! server errors; their message is passed through to the client.

use crate::handler::{Error, ErrorKind};

impl From<crate::error::Error> for Error<'static> {
    fn from(error: crate::error::Error) -> Self {
        ErrorKind::InternalServerError
            .with_message(error.message().to_string())
            .with_context(error.kind().as_str())
            .into_static()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_failure_maps_to_server_error() {
        let source = crate::error::Error::file_system("failed to write artifact");
        let error: Error<'static> = source.into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.message(), Some("failed to write artifact"));
    }
}
