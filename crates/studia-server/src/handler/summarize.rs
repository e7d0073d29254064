//! Summarization handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use studia_inference::{Capabilities, SummaryRequest};

use crate::extract::{Json, ValidateJson};
use crate::handler::Result;
use crate::handler::request::SummarizeText;
use crate::handler::response::{ErrorResponse, Summary};
use crate::service::{ServiceConfig, ServiceState};

/// Tracing target for summarization operations.
const TRACING_TARGET: &str = "studia_server::handler::summarize";

/// Summarizes the supplied text within the configured length bounds.
#[tracing::instrument(skip_all)]
async fn summarize_text(
    State(capabilities): State<Capabilities>,
    State(config): State<ServiceConfig>,
    ValidateJson(request): ValidateJson<SummarizeText>,
) -> Result<(StatusCode, Json<Summary>)> {
    tracing::debug!(target: TRACING_TARGET, text_len = request.text.len(), "Summarizing text");

    let summary_request =
        SummaryRequest::new(request.text).with_params(config.summary_params());
    let response = capabilities.summarization().summarize(&summary_request).await?;
    let summary = Summary::from_response(response)?;

    tracing::info!(target: TRACING_TARGET, "Text summarized");

    Ok((StatusCode::OK, Json(summary)))
}

fn summarize_text_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Summarize text")
        .description("Produces a short abstractive summary of the supplied text.")
        .response::<200, Json<Summary>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/summarize", post_with(summarize_text, summarize_text_docs))
        .with_path_items(|item| item.tag("Texts"))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use studia_inference::mock::MockProvider;

    use crate::handler::test_support::create_test_server;

    #[tokio::test]
    async fn summarizes_text() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/summarize")
            .json(&json!({"text": "A very long article about the history of Paris."}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["summary"], "A concise summary.");
        assert_eq!(provider.invocations().summarization, 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_text_is_rejected() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server.post("/summarize").json(&json!({"text": ""})).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Provide text to summarize");
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_summaries() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider).await?;
        let payload = json!({"text": "The same input text."});

        let first: Value = server.post("/summarize").json(&payload).await.json();
        let second: Value = server.post("/summarize").json(&payload).await.json();
        assert_eq!(first, second);
        Ok(())
    }
}
