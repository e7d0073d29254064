//! Shared handler helpers.

use studia_inference::types::Document;

use crate::extract::Multipart;
use crate::handler::{Error, ErrorKind, Result};

/// The multipart part name image endpoints expect.
const FILE_PART: &str = "file";

/// Reads the uploaded image out of a multipart request.
///
/// The upload rule for every image endpoint: a part named `file` must be
/// present with a non-empty filename and a non-empty body. Anything else is
/// a validation failure, raised before any capability is invoked.
pub(crate) async fn read_image_upload(multipart: Multipart) -> Result<Document> {
    let mut multipart = multipart.into_inner();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_PART) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.is_empty());
        let Some(file_name) = file_name else {
            return Err(ErrorKind::BadRequest
                .with_message("Provide an image file")
                .with_context("file part has no filename")
                .into_static());
        };

        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;
        if data.is_empty() {
            return Err(ErrorKind::BadRequest
                .with_message("Uploaded image file is empty")
                .into_static());
        }

        let mut document = Document::new(data).with_file_name(file_name);
        if let Some(content_type) = content_type {
            document = document.with_content_type(content_type);
        }
        return Ok(document);
    }

    Err(ErrorKind::BadRequest
        .with_message("Provide an image file")
        .with_context("multipart request has no file part")
        .into_static())
}

fn multipart_error(error: axum::extract::multipart::MultipartError) -> Error<'static> {
    ErrorKind::BadRequest
        .with_message("Invalid multipart request")
        .with_context(error.to_string())
        .into_static()
}
