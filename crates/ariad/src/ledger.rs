//! Command ledger - bounded, newest-first history with derived metrics.
//!
//! The single mutable state owned by the pipeline, updated only through the
//! transition methods here. Transitions on stale or evicted ids are no-ops;
//! nothing in the ledger ever panics on a bad id.

use std::collections::VecDeque;

use aria_common::{CommandId, CommandRecord, CommandStatus, Intent, Metrics, Outcome};
use serde::Serialize;
use tracing::debug;

/// Maximum records retained; insertion beyond this evicts the oldest.
pub const LEDGER_CAPACITY: usize = 24;

/// Observable state exposed to any presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSnapshot {
    pub commands: Vec<CommandRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_outcome: Option<Outcome>,
    pub metrics: Metrics,
}

/// Ordered command history, newest first.
#[derive(Debug, Default)]
pub struct CommandLedger {
    records: VecDeque<CommandRecord>,
    active_outcome: Option<Outcome>,
    seq: u64,
}

impl CommandLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `processing` record at the head. Blank input is rejected and
    /// never enters the ledger.
    pub fn submit(&mut self, input: &str) -> Option<CommandId> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let id = CommandId::mint(self.seq);
        self.seq += 1;
        self.records.push_front(CommandRecord::new(id.clone(), input));
        while self.records.len() > LEDGER_CAPACITY {
            let evicted = self.records.pop_back();
            if let Some(record) = evicted {
                debug!(id = %record.id, "evicted oldest ledger record");
            }
        }
        Some(id)
    }

    /// Set or refine the parsed intent. Allowed only while the record is
    /// still `processing`; no-op for terminal, stale, or evicted ids.
    pub fn attach_intent(&mut self, id: &CommandId, intent: Intent) {
        if let Some(record) = self.find_mut(id) {
            if record.status == CommandStatus::Processing {
                record.parsed_intent = Some(intent);
            }
        }
    }

    /// Transition `processing → completed` and publish the outcome as the
    /// ledger-wide active outcome. No-op if the record is terminal or gone.
    pub fn complete(&mut self, id: &CommandId, outcome: Outcome) {
        if let Some(record) = self.find_mut(id) {
            if record.status == CommandStatus::Processing {
                record.status = CommandStatus::Completed;
                record.outcome = Some(outcome.clone());
                self.active_outcome = Some(outcome);
            }
        }
    }

    /// Transition `processing → failed`, synthesizing an outcome whose
    /// details carry the failure reason.
    pub fn fail(&mut self, id: &CommandId, reason: &str) {
        let reason = reason.trim();
        let reason = if reason.is_empty() { "Unknown error" } else { reason };
        if let Some(record) = self.find_mut(id) {
            if record.status == CommandStatus::Processing {
                record.status = CommandStatus::Failed;
                record.outcome = Some(Outcome::new("Failed", reason));
            }
        }
    }

    /// Empty the ledger and drop the active outcome. Irreversible.
    pub fn clear(&mut self) {
        self.records.clear();
        self.active_outcome = None;
    }

    /// Metrics recomputed on every read, never cached.
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(self.records.iter())
    }

    pub fn active_outcome(&self) -> Option<&Outcome> {
        self.active_outcome.as_ref()
    }

    /// Records newest first.
    pub fn records(&self) -> impl Iterator<Item = &CommandRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            commands: self.records.iter().cloned().collect(),
            active_outcome: self.active_outcome.clone(),
            metrics: self.metrics(),
        }
    }

    fn find_mut(&mut self, id: &CommandId) -> Option<&mut CommandRecord> {
        self.records.iter_mut().find(|record| record.id == *id)
    }
}
