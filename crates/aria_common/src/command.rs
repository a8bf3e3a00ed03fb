//! Command records tracked by the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::outcome::Outcome;

/// Unique command identifier: unix millis plus an in-process sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(String);

impl CommandId {
    /// Mint a new id for the given sequence number.
    pub fn mint(seq: u64) -> Self {
        Self(format!("cmd-{}-{}", Utc::now().timestamp_millis(), seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a command record. Terminal once completed or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Processing,
    Completed,
    Failed,
}

impl CommandStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// One entry in the command ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub id: CommandId,
    /// Original raw text, immutable once created
    pub input: String,
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_intent: Option<Intent>,
    /// Absent while processing; immutable once terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    pub created_at: DateTime<Utc>,
}

impl CommandRecord {
    /// New record in `processing` state.
    pub fn new(id: CommandId, input: impl Into<String>) -> Self {
        Self {
            id,
            input: input.into(),
            status: CommandStatus::Processing,
            parsed_intent: None,
            outcome: None,
            created_at: Utc::now(),
        }
    }
}
