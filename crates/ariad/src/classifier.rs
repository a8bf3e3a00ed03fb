//! Rule-based intent classifier.
//!
//! Maps a raw utterance to a structured, confidence-scored intent. Trigger
//! tables are evaluated in a fixed category priority order
//! (call > message > automation > launch-app), never by input order, so
//! classification is deterministic. No learned model.

use aria_common::intent::{Intent, IntentAction, IntentEntities};
use aria_common::ReferenceDirectory;
use tracing::debug;

/// Upper bound of the low-confidence band; `Unknown` always sits below it.
pub const LOW_CONFIDENCE_MAX: f64 = 0.35;
/// Lower bound of the action-only band.
pub const MEDIUM_CONFIDENCE_MIN: f64 = 0.5;
/// Lower bound of the entity-plus-action band.
pub const HIGH_CONFIDENCE_MIN: f64 = 0.8;

/// Fixed confidence assigned when no category matches.
const UNKNOWN_CONFIDENCE: f64 = 0.2;

/// Band ceilings: corroborating hits bump confidence but never cross a band.
const MEDIUM_CONFIDENCE_MAX: f64 = 0.79;
const HIGH_CONFIDENCE_MAX: f64 = 0.97;

/// Trigger phrases per category. Single words match whole words; phrases
/// match as substrings of the normalized utterance.
const CALL_TRIGGERS: &[&str] = &["call", "dial", "phone", "ring"];
const MESSAGE_TRIGGERS: &[&str] = &["text", "send a message", "message", "sms", "tell"];
const AUTOMATION_TRIGGERS: &[&str] = &[
    "remind",
    "reminder",
    "schedule",
    "timer",
    "routine",
    "automation",
    "every morning",
    "every night",
    "turn on",
    "turn off",
];
const LAUNCH_TRIGGERS: &[&str] = &["open", "launch", "start", "switch to", "play", "show"];

/// Category priority order used to break ties between trigger tables.
const CATEGORY_TRIGGERS: &[(IntentAction, &[&str])] = &[
    (IntentAction::Call, CALL_TRIGGERS),
    (IntentAction::Message, MESSAGE_TRIGGERS),
    (IntentAction::Automation, AUTOMATION_TRIGGERS),
    (IntentAction::LaunchApp, LAUNCH_TRIGGERS),
];

/// Classify an utterance against the reference directory.
///
/// Pure function of its inputs; never fails. Anything that matches no
/// category degrades to `Unknown` in the low-confidence band with no
/// entities.
pub fn classify(utterance: &str, directory: &ReferenceDirectory) -> Intent {
    let normalized = normalize(utterance);

    let mut candidate = None;
    for (action, triggers) in CATEGORY_TRIGGERS {
        let hits = trigger_hits(&normalized, triggers);
        if hits > 0 {
            candidate = Some((*action, hits));
            break;
        }
    }

    let Some((action, hits)) = candidate else {
        debug!(utterance = %normalized, "no trigger matched, degrading to unknown");
        return Intent {
            action: IntentAction::Unknown,
            summary: "Awaiting a clearer command".to_string(),
            confidence: UNKNOWN_CONFIDENCE,
            entities: IntentEntities::default(),
        };
    };

    let mut entities = IntentEntities::default();
    match action {
        IntentAction::Call | IntentAction::Message => {
            entities.contact = directory.match_contact(&normalized).cloned();
        }
        IntentAction::LaunchApp => {
            entities.app = directory.match_app(&normalized).cloned();
        }
        IntentAction::Automation => {
            entities.when = extract_when(&normalized);
        }
        IntentAction::Unknown => {}
    }

    let resolved = entities.contact.is_some() || entities.app.is_some();
    let confidence = score(resolved, hits, entities.when.is_some());
    let summary = summarize(action, &entities, &normalized);

    debug!(
        action = %action,
        confidence,
        hits,
        resolved,
        "classified utterance"
    );

    Intent {
        action,
        summary,
        confidence,
        entities,
    }
}

/// Lowercase and strip punctuation, keeping characters that occur in phone
/// numbers and clock times (`+`, `:`, digits).
fn normalize(utterance: &str) -> String {
    let lowered = utterance.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if c.is_alphanumeric() || c.is_whitespace() || c == '+' || c == ':' {
            out.push(c);
        } else {
            out.push(' ');
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count trigger matches for one category.
fn trigger_hits(normalized: &str, triggers: &[&str]) -> usize {
    triggers
        .iter()
        .filter(|trigger| {
            if trigger.contains(' ') {
                normalized.contains(*trigger)
            } else {
                normalized.split_whitespace().any(|word| word == **trigger)
            }
        })
        .count()
}

/// Confidence within the band dictated by entity resolution. Extra
/// corroborating hits bump the value but stay inside the band.
fn score(entity_resolved: bool, hits: usize, has_when: bool) -> f64 {
    let extra = hits.saturating_sub(1) + usize::from(has_when);
    if entity_resolved {
        (0.82 + 0.05 * extra as f64).min(HIGH_CONFIDENCE_MAX)
    } else {
        (0.55 + 0.08 * extra as f64).min(MEDIUM_CONFIDENCE_MAX)
    }
}

/// Capture a time-ish phrase for the `when` slot: "at 7", "tomorrow",
/// "in 20 minutes", "every morning".
fn extract_when(normalized: &str) -> Option<String> {
    let words: Vec<&str> = normalized.split_whitespace().collect();

    for window in words.windows(2) {
        if window[0] == "at" && window[1].chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Some(format!("at {}", window[1]));
        }
        if window[0] == "every" {
            return Some(format!("every {}", window[1]));
        }
    }
    for window in words.windows(3) {
        if window[0] == "in" && window[1].chars().all(|c| c.is_ascii_digit()) {
            return Some(format!("in {} {}", window[1], window[2]));
        }
    }
    if words.contains(&"tomorrow") {
        return Some("tomorrow".to_string());
    }
    if words.contains(&"tonight") {
        return Some("tonight".to_string());
    }
    None
}

/// Template a one-line summary from the resolved entity, or fall back to a
/// generic phrasing of the action.
fn summarize(action: IntentAction, entities: &IntentEntities, normalized: &str) -> String {
    match action {
        IntentAction::Call => match &entities.contact {
            Some(contact) => format!("Calling {}", contact.name),
            None => match extract_phone(normalized) {
                Some(number) => format!("Calling {}", number),
                None => "Placing a call".to_string(),
            },
        },
        IntentAction::Message => match &entities.contact {
            Some(contact) => format!("Sending a message to {}", contact.name),
            None => "Sending a message".to_string(),
        },
        IntentAction::Automation => match &entities.when {
            Some(when) => format!("Scheduling a routine {}", when),
            None => "Running a routine".to_string(),
        },
        IntentAction::LaunchApp => match &entities.app {
            Some(app) => format!("Opening {}", app.name),
            None => "Opening an app".to_string(),
        },
        IntentAction::Unknown => "Awaiting a clearer command".to_string(),
    }
}

/// Pull a dialable number (7+ digits, `+` allowed) out of the utterance.
fn extract_phone(normalized: &str) -> Option<String> {
    normalized
        .split_whitespace()
        .find(|word| {
            let digits = word.chars().filter(|c| c.is_ascii_digit()).count();
            digits >= 7 && word.chars().all(|c| c.is_ascii_digit() || c == '+')
        })
        .map(|word| word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dir() -> ReferenceDirectory {
        ReferenceDirectory::default()
    }

    #[test]
    fn test_call_with_known_contact_is_high_band() {
        let intent = classify("Call Alex Chen", &dir());
        assert_eq!(intent.action, IntentAction::Call);
        assert!(intent.confidence >= HIGH_CONFIDENCE_MIN);
        assert!(intent.confidence <= 1.0);
        assert_eq!(intent.entities.contact.as_ref().unwrap().name, "Alex Chen");
        assert_eq!(intent.summary, "Calling Alex Chen");
    }

    #[test]
    fn test_call_without_contact_is_medium_band() {
        let intent = classify("call someone for me", &dir());
        assert_eq!(intent.action, IntentAction::Call);
        assert!(intent.confidence >= MEDIUM_CONFIDENCE_MIN);
        assert!(intent.confidence < HIGH_CONFIDENCE_MIN);
        assert!(intent.entities.contact.is_none());
    }

    #[test]
    fn test_gibberish_is_unknown_low_band() {
        let intent = classify("asdkj qwoei", &dir());
        assert_eq!(intent.action, IntentAction::Unknown);
        assert!(intent.confidence < LOW_CONFIDENCE_MAX);
        assert!(intent.entities.is_empty());
    }

    #[test]
    fn test_category_priority_breaks_ties() {
        // Both "call" and "open" match; call wins on fixed priority.
        let intent = classify("open the dialer and call marcus", &dir());
        assert_eq!(intent.action, IntentAction::Call);
    }

    #[test]
    fn test_launch_app_resolves_by_keyword() {
        let intent = classify("play some music", &dir());
        assert_eq!(intent.action, IntentAction::LaunchApp);
        assert_eq!(intent.entities.app.as_ref().unwrap().id, "music");
        assert!(intent.confidence >= HIGH_CONFIDENCE_MIN);
        assert_eq!(intent.summary, "Opening Music");
    }

    #[test]
    fn test_automation_captures_when_slot() {
        let intent = classify("remind me about standup at 9", &dir());
        assert_eq!(intent.action, IntentAction::Automation);
        assert_eq!(intent.entities.when.as_deref(), Some("at 9"));
        // No directory entity: stays in the medium band.
        assert!(intent.confidence >= MEDIUM_CONFIDENCE_MIN);
        assert!(intent.confidence < HIGH_CONFIDENCE_MIN);
    }

    #[test]
    fn test_phone_number_survives_normalization() {
        let intent = classify("dial +14155550119", &dir());
        assert_eq!(intent.action, IntentAction::Call);
        assert_eq!(intent.summary, "Calling +14155550119");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let a = classify("Send a message to Priya", &dir());
        let b = classify("Send a message to Priya", &dir());
        assert_eq!(a.action, b.action);
        assert_eq!(a.summary, b.summary);
        assert_relative_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_confidence_always_in_unit_range() {
        let inputs = [
            "call dial phone ring alex chen",
            "remind schedule timer routine every morning at 6",
            "open launch start play music playlist song",
            "",
            "   ",
            "zzz",
        ];
        for input in inputs {
            let intent = classify(input, &dir());
            assert!(
                (0.0..=1.0).contains(&intent.confidence),
                "confidence out of range for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_normalize_strips_punctuation_keeps_times() {
        assert_eq!(normalize("Remind me, at 7:30!"), "remind me at 7:30");
        assert_eq!(normalize("Call +1-415-555"), "call +1 415 555");
    }
}
