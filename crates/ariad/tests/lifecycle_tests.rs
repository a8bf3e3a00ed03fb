//! Command ledger lifecycle tests.
//!
//! Verify the transition table (`processing → completed | failed`, terminal
//! states never revert), bounded eviction, and the metrics conventions.

use aria_common::intent::{Intent, IntentAction, IntentEntities};
use aria_common::{CommandStatus, Outcome};
use ariad::ledger::{CommandLedger, LEDGER_CAPACITY};

fn intent(confidence: f64) -> Intent {
    Intent {
        action: IntentAction::Call,
        summary: "Calling Alex Chen".to_string(),
        confidence,
        entities: IntentEntities::default(),
    }
}

fn outcome(details: &str) -> Outcome {
    Outcome::new("Calling", details)
}

// ============================================================================
// Lifecycle transitions
// ============================================================================

#[test]
fn test_submit_creates_processing_record() {
    let mut ledger = CommandLedger::new();
    let id = ledger.submit("call alex").unwrap();

    let record = ledger.records().next().unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.status, CommandStatus::Processing);
    assert!(record.parsed_intent.is_none());
    assert!(record.outcome.is_none());
}

#[test]
fn test_blank_submission_is_rejected() {
    let mut ledger = CommandLedger::new();
    assert!(ledger.submit("").is_none());
    assert!(ledger.submit("   \t ").is_none());
    assert!(ledger.is_empty());
}

#[test]
fn test_complete_sets_outcome_and_active_outcome() {
    let mut ledger = CommandLedger::new();
    let id = ledger.submit("call alex").unwrap();
    ledger.attach_intent(&id, intent(0.82));
    ledger.complete(&id, outcome("Calling Alex Chen at +1 415 555 0119."));

    let record = ledger.records().next().unwrap();
    assert_eq!(record.status, CommandStatus::Completed);
    assert!(record.outcome.is_some());
    assert_eq!(
        ledger.active_outcome().unwrap().details,
        "Calling Alex Chen at +1 415 555 0119."
    );
}

#[test]
fn test_fail_synthesizes_failure_outcome() {
    let mut ledger = CommandLedger::new();
    let id = ledger.submit("call alex").unwrap();
    ledger.fail(&id, "classifier produced an invalid intent");

    let record = ledger.records().next().unwrap();
    assert_eq!(record.status, CommandStatus::Failed);
    let failure = record.outcome.as_ref().unwrap();
    assert_eq!(failure.title, "Failed");
    assert_eq!(failure.details, "classifier produced an invalid intent");
    // A failure never becomes the active outcome.
    assert!(ledger.active_outcome().is_none());
}

#[test]
fn test_terminal_states_never_revert() {
    let mut ledger = CommandLedger::new();
    let id = ledger.submit("call alex").unwrap();
    ledger.complete(&id, outcome("done"));

    // All of these are no-ops on a terminal record.
    ledger.fail(&id, "too late");
    ledger.complete(&id, outcome("again"));
    ledger.attach_intent(&id, intent(0.99));

    let record = ledger.records().next().unwrap();
    assert_eq!(record.status, CommandStatus::Completed);
    assert_eq!(record.outcome.as_ref().unwrap().details, "done");
    assert!(record.parsed_intent.is_none());
}

#[test]
fn test_intent_refinement_while_processing() {
    let mut ledger = CommandLedger::new();
    let id = ledger.submit("call alex").unwrap();
    ledger.attach_intent(&id, intent(0.55));
    ledger.attach_intent(&id, intent(0.87));

    let record = ledger.records().next().unwrap();
    assert_eq!(record.parsed_intent.as_ref().unwrap().confidence, 0.87);
}

#[test]
fn test_stale_id_transitions_are_noops() {
    let mut ledger = CommandLedger::new();
    let id = ledger.submit("call alex").unwrap();
    ledger.clear();

    // Record is gone; nothing panics, nothing reappears.
    ledger.attach_intent(&id, intent(0.82));
    ledger.complete(&id, outcome("ghost"));
    ledger.fail(&id, "ghost");
    assert!(ledger.is_empty());
    assert!(ledger.active_outcome().is_none());
}

// ============================================================================
// Bounded eviction
// ============================================================================

#[test]
fn test_capacity_is_never_exceeded() {
    let mut ledger = CommandLedger::new();
    for i in 0..(LEDGER_CAPACITY + 10) {
        ledger.submit(&format!("command {}", i)).unwrap();
    }
    assert_eq!(ledger.len(), LEDGER_CAPACITY);
}

#[test]
fn test_eviction_is_oldest_first_newest_first_order() {
    let mut ledger = CommandLedger::new();
    for i in 0..(LEDGER_CAPACITY + 3) {
        ledger.submit(&format!("command {}", i)).unwrap();
    }

    let inputs: Vec<&str> = ledger.records().map(|r| r.input.as_str()).collect();
    // Newest first at the head.
    assert_eq!(inputs[0], format!("command {}", LEDGER_CAPACITY + 2));
    // The three oldest were evicted.
    assert_eq!(*inputs.last().unwrap(), "command 3");
}

#[test]
fn test_evicted_record_id_is_stale() {
    let mut ledger = CommandLedger::new();
    let first = ledger.submit("command 0").unwrap();
    for i in 1..=LEDGER_CAPACITY {
        ledger.submit(&format!("command {}", i)).unwrap();
    }

    ledger.complete(&first, outcome("ghost"));
    assert!(ledger.active_outcome().is_none());
    assert!(ledger.records().all(|r| r.status == CommandStatus::Processing));
}

// ============================================================================
// Metrics conventions
// ============================================================================

#[test]
fn test_empty_ledger_metrics() {
    let ledger = CommandLedger::new();
    let metrics = ledger.metrics();
    assert_eq!(metrics.total, 0);
    assert_eq!(metrics.success_rate, 100);
    assert_eq!(metrics.average_confidence, 0);
}

/// 3 submitted, 2 completed: round(100 * 2/3) = 67.
#[test]
fn test_success_rate_rounds() {
    let mut ledger = CommandLedger::new();
    let a = ledger.submit("one").unwrap();
    let b = ledger.submit("two").unwrap();
    ledger.submit("three").unwrap();

    ledger.complete(&a, outcome("ok"));
    ledger.complete(&b, outcome("ok"));

    let metrics = ledger.metrics();
    assert_eq!(metrics.total, 3);
    assert_eq!(metrics.success_rate, 67);
}

#[test]
fn test_average_confidence_over_completed_only() {
    let mut ledger = CommandLedger::new();
    let a = ledger.submit("one").unwrap();
    let b = ledger.submit("two").unwrap();
    let c = ledger.submit("three").unwrap();

    ledger.attach_intent(&a, intent(0.8));
    ledger.attach_intent(&b, intent(0.6));
    ledger.attach_intent(&c, intent(0.99));

    ledger.complete(&a, outcome("ok"));
    ledger.complete(&b, outcome("ok"));
    ledger.fail(&c, "boom"); // failed records never count

    // round(100 * (0.8 + 0.6) / 2) = 70
    assert_eq!(ledger.metrics().average_confidence, 70);
}

#[test]
fn test_no_completed_means_zero_confidence() {
    let mut ledger = CommandLedger::new();
    let id = ledger.submit("one").unwrap();
    ledger.fail(&id, "boom");

    let metrics = ledger.metrics();
    assert_eq!(metrics.success_rate, 0);
    assert_eq!(metrics.average_confidence, 0);
}

#[test]
fn test_clear_resets_everything() {
    let mut ledger = CommandLedger::new();
    let id = ledger.submit("call alex").unwrap();
    ledger.complete(&id, outcome("ok"));

    ledger.clear();
    assert!(ledger.is_empty());
    assert!(ledger.active_outcome().is_none());
    assert_eq!(ledger.metrics().total, 0);
    assert_eq!(ledger.metrics().success_rate, 100);
}
