//! Text generation types and operations.
//!
//! Generation backs three endpoint families: the chat assistant and the two
//! math solvers. Each family is served by its own model variant, identified
//! by [`GeneratorId`]; a provider implements one `generate` entry point and
//! selects the underlying model from the variant.

mod request;
mod response;

pub use request::{GenerationParams, GenerationRequest};
pub use response::{GeneratedText, GenerationResponse};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::Result;

/// Identifies a registered generation model variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GeneratorId {
    /// General-purpose chat assistant model.
    Chat,
    /// Math-specialized solver model.
    Math,
    /// Phi-family math solver model.
    MathPhi,
}

/// Provider trait for text generation.
#[async_trait::async_trait]
pub trait GenerateProvider: Send + Sync {
    /// Run the given model variant over the request's prompt.
    async fn generate(
        &self,
        variant: GeneratorId,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse>;
}
