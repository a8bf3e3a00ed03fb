//! Structured intents produced by the classifier.

use serde::{Deserialize, Serialize};

use crate::directory::{AppShortcut, Contact};

/// Action category inferred from an utterance. Exactly one per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntentAction {
    Call,
    Message,
    Automation,
    LaunchApp,
    Unknown,
}

impl std::fmt::Display for IntentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Call => "call",
            Self::Message => "message",
            Self::Automation => "automation",
            Self::LaunchApp => "launch-app",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Reference-directory slots resolved for an intent.
///
/// Slots are present only when the classifier found a concrete referent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentEntities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<AppShortcut>,
    /// Time-ish phrase captured from the utterance ("at 7", "tomorrow", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
}

impl IntentEntities {
    pub fn is_empty(&self) -> bool {
        self.contact.is_none() && self.app.is_none() && self.when.is_none()
    }
}

/// Result of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub action: IntentAction,
    /// One-line human-readable description of the inferred action
    pub summary: String,
    /// Match specificity in [0, 1]; `Unknown` always sits in the low band
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "IntentEntities::is_empty")]
    pub entities: IntentEntities,
}
