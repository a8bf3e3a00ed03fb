//! Outcome simulator - deterministic emulation of command execution.
//!
//! No real telephony, messaging, or automation backend exists; the outcome is
//! a canned, intent-parameterized narrative. Total function: a malformed
//! intent (missing entity for an action that normally carries one) degrades
//! to a generic phrasing instead of failing, so the pipeline never blocks on
//! bad classification.

use aria_common::intent::{Intent, IntentAction};
use aria_common::Outcome;

/// Clarification text returned for unknown intents.
const CLARIFICATION: &str = "I did not catch a supported command in that. \
Confidence is low; try something like \"call Alex Chen\" or \"open music\".";

/// Simulate execution of a classified intent.
///
/// Deterministic except for the outcome timestamp: two structurally identical
/// intents yield identical `title`/`details`.
pub fn simulate(intent: &Intent) -> Outcome {
    match intent.action {
        IntentAction::Call => match &intent.entities.contact {
            Some(contact) => Outcome::new(
                "Calling",
                format!("Calling {} at {}.", contact.name, contact.phone),
            ),
            None => Outcome::new("Calling", format!("{} over the emulated line.", intent.summary)),
        },
        IntentAction::Message => match &intent.entities.contact {
            Some(contact) => Outcome::new(
                "Sending message",
                format!("Sending message to {}.", contact.name),
            ),
            None => Outcome::new(
                "Sending message",
                "Drafting a message. Name a recipient to send it.",
            ),
        },
        IntentAction::Automation => Outcome::new(
            "Running automation",
            format!("Running automation: {}", intent.summary),
        ),
        IntentAction::LaunchApp => match &intent.entities.app {
            Some(app) => Outcome::new(
                "Opening app",
                format!("Opening {}. {}", app.name, app.description),
            ),
            None => Outcome::new("Opening app", "Opening the requested app."),
        },
        IntentAction::Unknown => Outcome::new("Needs clarification", CLARIFICATION),
    }
}
