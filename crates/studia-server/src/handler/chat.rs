//! Chat assistant handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use studia_inference::{Capabilities, GenerationRequest, GeneratorId};

use crate::extract::{Json, ValidateJson};
use crate::handler::Result;
use crate::handler::request::SendChat;
use crate::handler::response::{ChatReply, ErrorResponse};
use crate::service::{ServiceConfig, ServiceState};

/// Tracing target for chat operations.
const TRACING_TARGET: &str = "studia_server::handler::chat";

/// Runs the chat assistant over the conversation's user messages.
///
/// The content of every `user`-role message is combined, in list order and
/// newline-separated, into one prompt; other roles are ignored. The reply
/// echoes that combined prompt as `input`.
#[tracing::instrument(skip_all)]
async fn send_chat(
    State(capabilities): State<Capabilities>,
    State(config): State<ServiceConfig>,
    ValidateJson(request): ValidateJson<SendChat>,
) -> Result<(StatusCode, Json<ChatReply>)> {
    let prompt = request.combined_prompt();

    tracing::debug!(
        target: TRACING_TARGET,
        message_count = request.messages.len(),
        prompt_len = prompt.len(),
        "Sending chat prompt"
    );

    let generator = capabilities.generator(GeneratorId::Chat)?;
    let generation_request =
        GenerationRequest::new(prompt.clone()).with_params(config.generation_params());
    let response = generator.generate(&generation_request).await?;
    let reply = ChatReply::from_response(prompt, response)?;

    tracing::info!(target: TRACING_TARGET, "Chat reply generated");

    Ok((StatusCode::OK, Json(reply)))
}

fn send_chat_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Chat with the assistant")
        .description(
            "Combines the conversation's user messages into one prompt and returns the \
             assistant's reply.",
        )
        .response::<200, Json<ChatReply>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/deepseek", post_with(send_chat, send_chat_docs))
        .with_path_items(|item| item.tag("Chat"))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use studia_inference::mock::MockProvider;

    use crate::handler::test_support::create_test_server;

    #[tokio::test]
    async fn combines_user_messages_into_one_prompt() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/deepseek")
            .json(&json!({"messages": [
                {"role": "user", "content": "A"},
                {"role": "assistant", "content": "B"},
                {"role": "user", "content": "C"},
            ]}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["input"], "A\nC");
        assert_eq!(body["output"], "The answer is 4.");
        // The generator received exactly the combined prompt.
        assert_eq!(provider.recorded_prompts(), vec!["A\nC"]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_message_list_is_rejected() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server.post("/deepseek").json(&json!({"messages": []})).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Provide at least one user message");
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn conversation_without_user_messages_is_rejected() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/deepseek")
            .json(&json!({"messages": [
                {"role": "assistant", "content": "hello"},
                {"role": "system", "content": "rules"},
            ]}))
            .await;

        response.assert_status_bad_request();
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn generation_failure_surfaces_message() -> anyhow::Result<()> {
        let provider = MockProvider::failing("chat model overloaded");
        let server = create_test_server(provider).await?;

        let response = server
            .post("/deepseek")
            .json(&json!({"messages": [{"role": "user", "content": "hi"}]}))
            .await;

        response.assert_status_internal_server_error();
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("chat model overloaded"));
        Ok(())
    }
}
