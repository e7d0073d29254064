//! Request body types for all handlers.
//!
//! Every type carries its validation rules; the [`ValidateJson`] extractor
//! enforces them before any handler body runs, so no capability is ever
//! invoked on an incomplete request.
//!
//! [`ValidateJson`]: crate::extract::ValidateJson

mod chat;
mod qa;
mod texts;

pub use chat::{ChatMessage, SendChat};
pub use qa::AskQuestion;
pub use texts::{SolveTextProblem, SummarizeText, SynthesizeText, TranslateText};
