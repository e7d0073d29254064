//! Standalone OCR handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use studia_inference::{Capabilities, OcrRequest};

use crate::extract::{Json, Multipart};
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, ExtractedText};
use crate::handler::utils::read_image_upload;
use crate::service::ServiceState;

/// Tracing target for OCR operations.
const TRACING_TARGET: &str = "studia_server::handler::vision";

/// Extracts text from an uploaded image.
#[tracing::instrument(skip_all)]
async fn extract_text(
    State(capabilities): State<Capabilities>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ExtractedText>)> {
    let document = read_image_upload(multipart).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        image_size = document.size(),
        content_type = ?document.content_type(),
        "Extracting text from image"
    );

    let ocr_request = OcrRequest::new(document);
    let response = capabilities.optical().extract_text(&ocr_request).await?;
    let extracted = ExtractedText::from_response(response)?;

    tracing::info!(
        target: TRACING_TARGET,
        text_len = extracted.text.len(),
        "Text extracted"
    );

    Ok((StatusCode::OK, Json(extracted)))
}

fn extract_text_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Extract text from an image")
        .description("Runs OCR over the uploaded image and returns the recognized text.")
        .response::<200, Json<ExtractedText>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/extract-text", post_with(extract_text, extract_text_docs))
        .with_path_items(|item| item.tag("Vision"))
}

#[cfg(test)]
mod tests {
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::Value;
    use studia_inference::mock::MockProvider;

    use crate::handler::test_support::create_test_server;

    fn image_form() -> MultipartForm {
        let part = Part::bytes(b"png bytes".as_slice())
            .file_name("equation.png")
            .mime_type("image/png");
        MultipartForm::new().add_part("file", part)
    }

    #[tokio::test]
    async fn extracts_and_trims_text() -> anyhow::Result<()> {
        let provider = MockProvider::with_text("  2 + 2 = ?  ");
        let server = create_test_server(provider.clone()).await?;

        let response = server.post("/extract-text").multipart(image_form()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["text"], "2 + 2 = ?");
        assert_eq!(provider.invocations().ocr, 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_part_is_rejected() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/extract-text")
            .multipart(MultipartForm::new().add_text("note", "no file here"))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Provide an image file");
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn ocr_failure_maps_to_server_error() -> anyhow::Result<()> {
        let provider = MockProvider::failing("ocr backend down");
        let server = create_test_server(provider).await?;

        let response = server.post("/extract-text").multipart(image_form()).await;

        response.assert_status_internal_server_error();
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("ocr backend down"));
        Ok(())
    }
}
