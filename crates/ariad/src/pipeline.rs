//! Command pipeline - submit → classify → simulate → ledger transitions.
//!
//! Typed input and finalized speech chunks converge on [`Assistant::submit_command`].
//! Any internal error becomes a failed ledger record; nothing propagates to
//! the caller.

use aria_common::intent::{Intent, IntentAction};
use aria_common::{AriaError, CommandId, Metrics, Outcome, ReferenceDirectory};
use tracing::{debug, warn};

use crate::classifier;
use crate::ledger::{CommandLedger, LedgerSnapshot};
use crate::simulator;

/// Fire-and-forget speech playback collaborator. Queued on the host audio
/// system; success or failure is never observed by the pipeline.
pub trait SpeechSynth {
    fn speak(&self, text: &str);
}

/// Synth that drops playback on the floor. Default for headless use and tests.
#[derive(Debug, Default)]
pub struct NullSynth;

impl SpeechSynth for NullSynth {
    fn speak(&self, _text: &str) {}
}

/// The assistant core: reference directory, command ledger, and playback.
pub struct Assistant {
    directory: ReferenceDirectory,
    ledger: CommandLedger,
    synth: Box<dyn SpeechSynth>,
}

impl Assistant {
    pub fn new(directory: ReferenceDirectory) -> Self {
        Self::with_synth(directory, Box::new(NullSynth))
    }

    pub fn with_synth(directory: ReferenceDirectory, synth: Box<dyn SpeechSynth>) -> Self {
        Self {
            directory,
            ledger: CommandLedger::new(),
            synth,
        }
    }

    /// Run one command through the pipeline. Blank input is silently ignored.
    pub fn submit_command(&mut self, text: &str) {
        let Some(id) = self.ledger.submit(text) else {
            debug!("ignoring blank command submission");
            return;
        };

        match self.execute(&id, text) {
            Ok(outcome) => {
                self.ledger.complete(&id, outcome.clone());
                self.synth.speak(&outcome.details);
            }
            Err(err) => {
                warn!(%err, id = %id, "command execution failed");
                self.ledger.fail(&id, &err.to_string());
            }
        }
    }

    /// Drop the whole timeline: records, active outcome, metrics baseline.
    pub fn reset_timeline(&mut self) {
        self.ledger.clear();
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    pub fn metrics(&self) -> Metrics {
        self.ledger.metrics()
    }

    pub fn directory(&self) -> &ReferenceDirectory {
        &self.directory
    }

    fn execute(&mut self, id: &CommandId, text: &str) -> Result<Outcome, AriaError> {
        let intent = classifier::classify(text, &self.directory);
        vet_intent(&intent)?;
        self.ledger.attach_intent(id, intent.clone());
        Ok(simulator::simulate(&intent))
    }
}

/// Guardrail on classifier output: a malformed intent becomes a failed
/// record instead of corrupting the timeline.
pub(crate) fn vet_intent(intent: &Intent) -> Result<(), AriaError> {
    if !intent.confidence.is_finite() || !(0.0..=1.0).contains(&intent.confidence) {
        return Err(AriaError::Classifier(format!(
            "confidence {} outside [0, 1]",
            intent.confidence
        )));
    }
    if intent.action == IntentAction::Unknown {
        if intent.confidence >= classifier::LOW_CONFIDENCE_MAX {
            return Err(AriaError::Classifier(
                "unknown intent above the low-confidence band".to_string(),
            ));
        }
        if !intent.entities.is_empty() {
            return Err(AriaError::Classifier(
                "unknown intent carrying entities".to_string(),
            ));
        }
    }
    if intent.summary.trim().is_empty() {
        return Err(AriaError::Classifier("empty summary".to_string()));
    }
    Ok(())
}
