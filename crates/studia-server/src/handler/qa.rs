//! Question-answering handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use studia_inference::{Capabilities, QaRequest};

use crate::extract::{Json, ValidateJson};
use crate::handler::Result;
use crate::handler::request::AskQuestion;
use crate::handler::response::{Answer, ErrorResponse};
use crate::service::ServiceState;

/// Tracing target for question-answering operations.
const TRACING_TARGET: &str = "studia_server::handler::qa";

/// Answers a question against the supplied context passage.
#[tracing::instrument(skip_all)]
async fn answer_question(
    State(capabilities): State<Capabilities>,
    ValidateJson(request): ValidateJson<AskQuestion>,
) -> Result<(StatusCode, Json<Answer>)> {
    tracing::debug!(target: TRACING_TARGET, "Answering question");

    let qa_request = QaRequest::new(request.question, request.context);
    let response = capabilities.qa().answer(&qa_request).await?;
    let answer = Answer::from_response(response)?;

    tracing::info!(target: TRACING_TARGET, "Question answered");

    Ok((StatusCode::OK, Json(answer)))
}

fn answer_question_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Answer a question")
        .description("Extracts the answer to the question from the supplied context passage.")
        .response::<200, Json<Answer>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/qa", post_with(answer_question, answer_question_docs))
        .with_path_items(|item| item.tag("Questions"))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use studia_inference::mock::MockProvider;

    use crate::handler::test_support::create_test_server;

    #[tokio::test]
    async fn answers_question() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/qa")
            .json(&json!({"context": "Paris is the capital of France.", "question": "What is the capital?"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["answer"], "Paris");
        assert_eq!(provider.invocations().qa, 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_reject_before_any_invocation() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/qa")
            .json(&json!({"context": "", "question": "What is the capital?"}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Provide context and question");
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn capability_failure_surfaces_message() -> anyhow::Result<()> {
        let provider = MockProvider::failing("qa backend unreachable");
        let server = create_test_server(provider).await?;

        let response = server
            .post("/qa")
            .json(&json!({"context": "ctx", "question": "q"}))
            .await;

        response.assert_status_internal_server_error();
        let body: Value = response.json();
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("qa backend unreachable")
        );
        Ok(())
    }
}
