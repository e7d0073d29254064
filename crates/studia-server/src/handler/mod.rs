//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! One module per endpoint family; [`routes`] merges them and [`router`]
//! finishes the OpenAPI document and produces the serveable router.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod chat;
mod error;
mod monitors;
mod qa;
mod solve;
mod speech;
mod summarize;
mod translate;
mod utils;
mod vision;

pub mod request;
pub mod response;

use std::sync::Arc;

use aide::axum::ApiRouter;
use aide::openapi::OpenApi;
use axum::Extension;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoResponse {
    axum::Json(api)
}

/// Returns an [`ApiRouter`] with all routes.
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(monitors::routes())
        .merge(qa::routes())
        .merge(summarize::routes())
        .merge(translate::routes())
        .merge(speech::routes())
        .merge(vision::routes())
        .merge(solve::routes())
        .merge(chat::routes())
}

/// Builds the serveable router: finishes the OpenAPI document, mounts it at
/// `/openapi.json`, and attaches the application state.
pub fn router(state: ServiceState) -> axum::Router {
    let mut api = OpenApi::default();

    routes()
        .finish_api_with(&mut api, |doc| {
            doc.title("Studia API")
                .summary("Inference capabilities behind one uniform contract")
        })
        .fallback(fallback)
        .route("/openapi.json", axum::routing::get(serve_openapi))
        .layer(Extension(Arc::new(api)))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum_test::TestServer;
    use studia_inference::mock::MockProvider;

    use crate::handler::router;
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] over the given mock provider.
    pub async fn create_test_server(provider: MockProvider) -> anyhow::Result<TestServer> {
        let artifact_dir = tempfile::tempdir()?.keep();
        let config = ServiceConfig::builder()
            .with_artifact_dir(artifact_dir)
            .build()?;
        let state = ServiceState::from_config(config, provider.into_capabilities()).await?;
        let server = TestServer::new(router(state))?;
        Ok(server)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use studia_inference::mock::MockProvider;

    use super::test_support::create_test_server;

    #[tokio::test]
    async fn unknown_routes_answer_with_the_error_envelope() -> anyhow::Result<()> {
        let server = create_test_server(MockProvider::default()).await?;

        let response = server.get("/no-such-route").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert!(body["error"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_is_served() -> anyhow::Result<()> {
        let server = create_test_server(MockProvider::default()).await?;

        let response = server.get("/openapi.json").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["info"]["title"], "Studia API");
        assert!(body["paths"]["/qa"].is_object());
        Ok(())
    }
}
