//! Multi-stage capability composition.
//!
//! Handlers that need a single capability call invoke it directly; the
//! chained operations (image in, solved problem out) live here so the
//! sequencing rules stay out of the HTTP layer.

mod solve;

pub use solve::{SolvedProblem, solve_from_image, solve_from_text};
