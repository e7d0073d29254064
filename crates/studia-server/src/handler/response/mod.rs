//! Response body types for all handlers.
//!
//! Each success envelope is a pure mapping from one capability's raw
//! response shape; constructors never re-invoke a capability and never
//! alter the extracted value beyond the documented whitespace trimming.

mod envelopes;
mod error_response;

pub use envelopes::{Answer, ChatReply, ExtractedText, HealthStatus, Solution, Summary, Translation};
pub use error_response::ErrorResponse;
