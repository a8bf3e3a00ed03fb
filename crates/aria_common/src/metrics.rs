//! Derived ledger metrics.

use serde::{Deserialize, Serialize};

use crate::command::{CommandRecord, CommandStatus};

/// Aggregate view over the command ledger, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of records currently in the ledger
    pub total: usize,
    /// Rounded percentage of completed records; 100 when the ledger is empty
    pub success_rate: u32,
    /// Rounded mean confidence (as a percentage) over completed records;
    /// 0 when nothing has completed
    pub average_confidence: u32,
}

impl Metrics {
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CommandRecord>,
    {
        let mut total = 0usize;
        let mut completed = 0usize;
        let mut confidence_sum = 0.0f64;

        for record in records {
            total += 1;
            if record.status == CommandStatus::Completed {
                completed += 1;
                confidence_sum += record
                    .parsed_intent
                    .as_ref()
                    .map(|intent| intent.confidence)
                    .unwrap_or(0.0);
            }
        }

        let success_rate = if total == 0 {
            100
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };

        let average_confidence = if completed == 0 {
            0
        } else {
            ((confidence_sum / completed as f64) * 100.0).round() as u32
        };

        Self {
            total,
            success_rate,
            average_confidence,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::compute(std::iter::empty())
    }
}
