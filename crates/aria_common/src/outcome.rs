//! Simulated execution outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of simulating one intent.
///
/// Derivable purely from the intent: two structurally identical intents yield
/// identical `title`/`details`, only `timestamp` differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Short status label
    pub title: String,
    /// Narrative sentence describing the simulated effect, never empty
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl Outcome {
    pub fn new(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            timestamp: Utc::now(),
        }
    }
}
