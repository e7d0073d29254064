//! Math solving handlers.
//!
//! Image endpoints run the two-stage OCR-to-generator chain; the typed
//! endpoint feeds the problem to the math generator directly. Solutions are
//! the generator's output passed through unverified.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use studia_inference::{Capabilities, GeneratorId};

use crate::extract::{Json, Multipart, ValidateJson};
use crate::handler::Result;
use crate::handler::request::SolveTextProblem;
use crate::handler::response::{ErrorResponse, Solution};
use crate::handler::utils::read_image_upload;
use crate::pipeline::{solve_from_image, solve_from_text};
use crate::service::{ServiceConfig, ServiceState};

/// Tracing target for solve operations.
const TRACING_TARGET: &str = "studia_server::handler::solve";

/// Solves a photographed math problem with the math-specialized model.
#[tracing::instrument(skip_all)]
async fn solve_math_model(
    State(capabilities): State<Capabilities>,
    State(config): State<ServiceConfig>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Solution>)> {
    solve_image(capabilities, config, multipart, GeneratorId::Math).await
}

fn solve_math_model_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Solve a photographed math problem")
        .description("Recognizes the problem in the uploaded image and solves it with the math model.")
        .response::<200, Json<Solution>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Solves a photographed math problem with the Phi-family model.
#[tracing::instrument(skip_all)]
async fn solve_math_phi(
    State(capabilities): State<Capabilities>,
    State(config): State<ServiceConfig>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Solution>)> {
    solve_image(capabilities, config, multipart, GeneratorId::MathPhi).await
}

fn solve_math_phi_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Solve a photographed math problem (Phi)")
        .description("Recognizes the problem in the uploaded image and solves it with the Phi model.")
        .response::<200, Json<Solution>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Solves a typed math problem.
#[tracing::instrument(skip_all)]
async fn solve_text_model(
    State(capabilities): State<Capabilities>,
    State(config): State<ServiceConfig>,
    ValidateJson(request): ValidateJson<SolveTextProblem>,
) -> Result<(StatusCode, Json<Solution>)> {
    tracing::debug!(target: TRACING_TARGET, "Solving typed problem");

    let solved = solve_from_text(
        &capabilities,
        GeneratorId::Math,
        config.generation_params(),
        request.problem,
    )
    .await?;

    tracing::info!(target: TRACING_TARGET, "Typed problem solved");

    Ok((StatusCode::OK, Json(Solution::from(solved))))
}

fn solve_text_model_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Solve a typed math problem")
        .description("Solves the supplied problem statement with the math model.")
        .response::<200, Json<Solution>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

async fn solve_image(
    capabilities: Capabilities,
    config: ServiceConfig,
    multipart: Multipart,
    variant: GeneratorId,
) -> Result<(StatusCode, Json<Solution>)> {
    let document = read_image_upload(multipart).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        variant = %variant,
        image_size = document.size(),
        "Solving photographed problem"
    );

    let solved = solve_from_image(
        &capabilities,
        variant,
        config.generation_params(),
        document,
    )
    .await?;

    tracing::info!(
        target: TRACING_TARGET,
        variant = %variant,
        problem_len = solved.problem.len(),
        "Photographed problem solved"
    );

    Ok((StatusCode::OK, Json(Solution::from(solved))))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/solve-math-model",
            post_with(solve_math_model, solve_math_model_docs),
        )
        .api_route(
            "/solve-math-phi",
            post_with(solve_math_phi, solve_math_phi_docs),
        )
        .api_route(
            "/solve-text-model",
            post_with(solve_text_model, solve_text_model_docs),
        )
        .with_path_items(|item| item.tag("Math"))
}

#[cfg(test)]
mod tests {
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::{Value, json};
    use studia_inference::mock::MockProvider;

    use crate::handler::test_support::create_test_server;

    fn image_form() -> MultipartForm {
        let part = Part::bytes(b"png bytes".as_slice())
            .file_name("problem.png")
            .mime_type("image/png");
        MultipartForm::new().add_part("file", part)
    }

    #[tokio::test]
    async fn solves_photographed_problem() -> anyhow::Result<()> {
        let provider = MockProvider::with_text("  2x = 8  ");
        let server = create_test_server(provider.clone()).await?;

        let response = server.post("/solve-math-model").multipart(image_form()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        // The problem field is exactly the trimmed OCR output, and the
        // generator received exactly that trimmed string.
        assert_eq!(body["problem"], "2x = 8");
        assert_eq!(body["solution"], "The answer is 4.");
        assert_eq!(provider.recorded_prompts(), vec!["2x = 8"]);
        assert_eq!(provider.invocations().ocr, 1);
        assert_eq!(provider.invocations().generation, 1);
        Ok(())
    }

    #[tokio::test]
    async fn phi_endpoint_runs_the_same_chain() -> anyhow::Result<()> {
        let provider = MockProvider::with_text("7 * 6");
        let server = create_test_server(provider.clone()).await?;

        let response = server.post("/solve-math-phi").multipart(image_form()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["problem"], "7 * 6");
        assert_eq!(provider.invocations().generation, 1);
        Ok(())
    }

    #[tokio::test]
    async fn solves_typed_problem() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/solve-text-model")
            .json(&json!({"problem": "2 + 2"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["problem"], "2 + 2");
        assert_eq!(body["solution"], "The answer is 4.");
        assert_eq!(provider.invocations().ocr, 0);
        Ok(())
    }

    #[tokio::test]
    async fn empty_typed_problem_is_rejected() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/solve-text-model")
            .json(&json!({"problem": ""}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Provide a math problem");
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_rejected_before_any_stage() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let server = create_test_server(provider.clone()).await?;

        let response = server
            .post("/solve-math-model")
            .multipart(MultipartForm::new().add_text("note", "nothing"))
            .await;

        response.assert_status_bad_request();
        assert_eq!(provider.invocations().total(), 0);
        Ok(())
    }
}
