//! Translation handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use studia_inference::{Capabilities, TranslationRequest};

use crate::extract::{Json, ValidateJson};
use crate::handler::Result;
use crate::handler::request::TranslateText;
use crate::handler::response::{ErrorResponse, Translation};
use crate::service::ServiceState;

/// Tracing target for translation operations.
const TRACING_TARGET: &str = "studia_server::handler::translate";

/// Translates the supplied text (English to Portuguese).
#[tracing::instrument(skip_all)]
async fn translate_text(
    State(capabilities): State<Capabilities>,
    ValidateJson(request): ValidateJson<TranslateText>,
) -> Result<(StatusCode, Json<Translation>)> {
    tracing::debug!(target: TRACING_TARGET, text_len = request.text.len(), "Translating text");

    let translation_request = TranslationRequest::new(request.text);
    let response = capabilities
        .translation()
        .translate(&translation_request)
        .await?;
    let translation = Translation::from_response(response)?;

    tracing::info!(target: TRACING_TARGET, "Text translated");

    Ok((StatusCode::OK, Json(translation)))
}

fn translate_text_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Translate text")
        .description("Translates the supplied English text to Portuguese.")
        .response::<200, Json<Translation>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/translate", post_with(translate_text, translate_text_docs))
        .with_path_items(|item| item.tag("Texts"))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use studia_inference::mock::MockProvider;

    use crate::handler::test_support::create_test_server;

    #[tokio::test]
    async fn translates_text() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/translate")
            .json(&json!({"text": "Hello, world."}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["translation"], "Olá, mundo.");
        assert_eq!(provider.invocations().translation, 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_text_is_rejected() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server.post("/translate").json(&json!({"text": ""})).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Provide text to translate");
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }
}
