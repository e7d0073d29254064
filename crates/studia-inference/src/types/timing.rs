//! Operation timing information.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// Start and end timestamps for a capability invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timing {
    /// When the operation started.
    pub started_at: Timestamp,
    /// When the operation ended.
    pub ended_at: Timestamp,
}

impl Timing {
    /// Create a new timing record.
    pub fn new(started_at: Timestamp, ended_at: Timestamp) -> Self {
        Self {
            started_at,
            ended_at,
        }
    }

    /// Duration between start and end.
    pub fn duration(&self) -> SignedDuration {
        self.ended_at.duration_since(self.started_at)
    }
}
