//! The `Turn` value object.

use serde::{Deserialize, Serialize};

/// One prompt/completion exchange.
///
/// Turns are value objects: two turns with identical fields are
/// interchangeable. They carry no persistent id — view state is keyed by
/// position within the transcript, and transcript order is always insertion
/// order as loaded or appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Seconds since the Unix epoch. Timezone handling and display
    /// formatting belong to the render surface.
    pub timestamp: f64,
    /// Who issued the prompt.
    pub user: String,
    /// The prompt text. May be empty.
    pub prompt: String,
    /// The completion text. May be empty.
    pub completion: String,
}

impl Turn {
    /// Creates a new turn.
    pub fn new(
        timestamp: f64,
        user: impl Into<String>,
        prompt: impl Into<String>,
        completion: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            user: user.into(),
            prompt: prompt.into(),
            completion: completion.into(),
        }
    }
}
