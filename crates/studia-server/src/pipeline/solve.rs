//! Math solving pipelines.

use studia_core::{Error, Result};
use studia_inference::types::Document;
use studia_inference::{
    Capabilities, GenerationParams, GenerationRequest, GeneratorId, OcrRequest,
};

/// Tracing target for solve pipelines.
const TRACING_TARGET: &str = "studia_server::pipeline::solve";

/// Result of a solve pipeline: the problem statement the generator worked
/// on and its solution, passed through unverified.
#[derive(Debug, Clone)]
pub struct SolvedProblem {
    /// The problem statement (recognized or typed).
    pub problem: String,
    /// The generated solution text.
    pub solution: String,
}

/// Two-stage chain: OCR the image, then feed the recognized text to the
/// selected math generator.
///
/// The recognized text is trimmed of surrounding whitespace and that exact
/// trimmed string becomes the generation prompt; it is also retained as the
/// returned problem statement.
pub async fn solve_from_image(
    capabilities: &Capabilities,
    variant: GeneratorId,
    params: GenerationParams,
    document: Document,
) -> Result<SolvedProblem> {
    let ocr_request = OcrRequest::new(document);
    let ocr_response = capabilities.optical().extract_text(&ocr_request).await?;

    let problem = ocr_response
        .first_text()
        .ok_or_else(|| {
            Error::external_error().with_message("text extraction returned no candidates")
        })?
        .trim()
        .to_string();

    tracing::debug!(
        target: TRACING_TARGET,
        variant = %variant,
        problem_len = problem.len(),
        "Recognized problem, dispatching to generator"
    );

    let solution = generate_solution(capabilities, variant, params, &problem).await?;
    Ok(SolvedProblem { problem, solution })
}

/// Single-stage path for typed problems: the problem text goes to the
/// generator verbatim.
pub async fn solve_from_text(
    capabilities: &Capabilities,
    variant: GeneratorId,
    params: GenerationParams,
    problem: String,
) -> Result<SolvedProblem> {
    let solution = generate_solution(capabilities, variant, params, &problem).await?;
    Ok(SolvedProblem { problem, solution })
}

async fn generate_solution(
    capabilities: &Capabilities,
    variant: GeneratorId,
    params: GenerationParams,
    problem: &str,
) -> Result<String> {
    let generator = capabilities.generator(variant)?;
    let request = GenerationRequest::new(problem).with_params(params);
    let response = generator.generate(&request).await?;

    response
        .first_text()
        .map(str::to_string)
        .ok_or_else(|| Error::external_error().with_message("math generation returned no candidates"))
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use studia_inference::mock::MockProvider;

    use super::*;

    fn image() -> Document {
        Document::new(Bytes::from_static(b"png bytes")).with_content_type("image/png")
    }

    #[tokio::test]
    async fn image_chain_trims_and_retains_problem() -> anyhow::Result<()> {
        let provider = MockProvider::with_text("  2x = 8  \n");
        let capabilities = provider.clone().into_capabilities();

        let solved = solve_from_image(
            &capabilities,
            GeneratorId::Math,
            GenerationParams::default(),
            image(),
        )
        .await?;

        assert_eq!(solved.problem, "2x = 8");
        // The generator received exactly the trimmed recognized text.
        assert_eq!(provider.recorded_prompts(), vec!["2x = 8"]);
        Ok(())
    }

    #[tokio::test]
    async fn text_path_passes_problem_verbatim() -> anyhow::Result<()> {
        let provider = MockProvider::default();
        let capabilities = provider.clone().into_capabilities();

        let solved = solve_from_text(
            &capabilities,
            GeneratorId::Math,
            GenerationParams::default(),
            "3 * 3".to_string(),
        )
        .await?;

        assert_eq!(solved.problem, "3 * 3");
        assert_eq!(provider.recorded_prompts(), vec!["3 * 3"]);
        assert_eq!(provider.invocations().ocr, 0);
        Ok(())
    }

    #[tokio::test]
    async fn ocr_failure_stops_the_chain() -> anyhow::Result<()> {
        let provider = MockProvider::failing("ocr backend down");
        let capabilities = provider.clone().into_capabilities();

        let error = solve_from_image(
            &capabilities,
            GeneratorId::MathPhi,
            GenerationParams::default(),
            image(),
        )
        .await
        .unwrap_err();

        assert!(error.to_string().contains("ocr backend down"));
        // The generation stage never ran.
        assert_eq!(provider.invocations().generation, 0);
        Ok(())
    }
}
