//! Speech synthesis handlers.

use aide::axum::ApiRouter;
use axum::extract::State;
use axum::response::IntoResponse;
use axum_extra::response::Attachment;
use studia_inference::{Capabilities, SpeechRequest};

use crate::extract::ValidateJson;
use crate::handler::Result;
use crate::handler::request::SynthesizeText;
use crate::service::{ArtifactStore, ServiceState};

/// Tracing target for speech synthesis operations.
const TRACING_TARGET: &str = "studia_server::handler::speech";

/// Synthesizes the supplied text and delivers the audio as an attachment.
///
/// The synthesized audio is spooled to a per-request artifact file before
/// delivery begins; the artifact is removed once it has been read back for
/// the response.
#[tracing::instrument(skip_all)]
async fn synthesize_speech(
    State(capabilities): State<Capabilities>,
    State(artifacts): State<ArtifactStore>,
    ValidateJson(request): ValidateJson<SynthesizeText>,
) -> Result<impl IntoResponse> {
    tracing::debug!(target: TRACING_TARGET, text_len = request.text.len(), "Synthesizing speech");

    let speech_request = SpeechRequest::new(request.text);
    let speech = capabilities.speech().synthesize(&speech_request).await?;

    let handle = artifacts.store(&speech.audio, &speech.media_type).await?;
    let payload = artifacts.take(&handle).await?;

    tracing::info!(
        target: TRACING_TARGET,
        artifact_id = %handle.id,
        audio_size = payload.len(),
        "Speech synthesized"
    );

    Ok(Attachment::new(payload)
        .filename(handle.file_name())
        .content_type(handle.media_type))
}

/// Returns a [`Router`] with all related routes.
///
/// The endpoint answers with a binary audio body, which OpenAPI route
/// documentation does not model, so it is registered as a plain route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new().route("/tts", axum::routing::post(synthesize_speech))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use studia_inference::mock::MockProvider;

    use crate::handler::test_support::create_test_server;

    #[tokio::test]
    async fn synthesizes_binary_audio_attachment() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server.post("/tts").json(&json!({"text": "hello"})).await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "audio/wav");
        let disposition = response.header("content-disposition");
        assert!(disposition.to_str()?.starts_with("attachment"));
        // A binary payload, not a JSON envelope.
        assert!(!response.as_bytes().is_empty());
        assert!(serde_json::from_slice::<Value>(response.as_bytes()).is_err());
        assert_eq!(provider.invocations().speech, 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_text_is_rejected_as_json_error() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server.post("/tts").json(&json!({"text": ""})).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Provide text for TTS");
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn synthesis_failure_maps_to_server_error() -> anyhow::Result<()> {
        let provider = MockProvider::failing("voice model offline");
        let server = create_test_server(provider).await?;

        let response = server.post("/tts").json(&json!({"text": "hello"})).await;

        response.assert_status_internal_server_error();
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("voice model offline"));
        Ok(())
    }
}
