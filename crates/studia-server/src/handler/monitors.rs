//! Monitoring handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use studia_inference::{Capabilities, ServiceStatus};

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, HealthStatus};
use crate::service::ServiceState;

/// Tracing target for monitoring operations.
const TRACING_TARGET: &str = "studia_server::handler::monitors";

/// Reports the health of the inference provider.
#[tracing::instrument(skip_all)]
async fn health(
    State(capabilities): State<Capabilities>,
) -> Result<(StatusCode, Json<HealthStatus>)> {
    let health = capabilities.health_check().await?;

    let status = match health.status {
        ServiceStatus::Healthy => "healthy",
        ServiceStatus::Degraded => "degraded",
        ServiceStatus::Unhealthy => "unhealthy",
    };

    tracing::debug!(target: TRACING_TARGET, status = %status, "Health check served");

    Ok((
        StatusCode::OK,
        Json(HealthStatus {
            status: status.to_string(),
        }),
    ))
}

fn health_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Reports the health of the underlying inference provider.")
        .response::<200, Json<HealthStatus>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health, health_docs))
        .with_path_items(|item| item.tag("Monitors"))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use studia_inference::mock::MockProvider;

    use crate::handler::test_support::create_test_server;

    #[tokio::test]
    async fn reports_healthy_provider() -> anyhow::Result<()> {
        let server = create_test_server(MockProvider::default()).await?;

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        Ok(())
    }
}
