//! Reference directory - known contacts, app shortcuts, and quick actions.
//!
//! Supplied by configuration at startup and never mutated by the engine.
//! Lookups are conservative: case-insensitive substring matching against the
//! normalized utterance, on full names and on single name tokens.

use serde::{Deserialize, Serialize};

/// Minimum length for a single name token to count as a match on its own.
/// Keeps two-letter fragments like "al" from resolving the wrong contact.
const MIN_TOKEN_MATCH_LEN: usize = 3;

/// Known contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Integrated application shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppShortcut {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub description: String,
}

/// Preset prompt that can be fired with one tap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title: String,
    pub prompt: String,
    pub hint: String,
}

/// Quick actions grouped under a display category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickActionGroup {
    pub category: String,
    pub items: Vec<QuickAction>,
}

/// Read-only roster the classifier resolves entities against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDirectory {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub apps: Vec<AppShortcut>,
}

impl ReferenceDirectory {
    /// Find the first contact whose full name, or any name token of at least
    /// three characters, appears in the (lowercased) utterance.
    pub fn match_contact(&self, normalized_utterance: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| {
            let name = contact.name.to_lowercase();
            if normalized_utterance.contains(&name) {
                return true;
            }
            name.split_whitespace().any(|token| {
                token.len() >= MIN_TOKEN_MATCH_LEN && contains_word(normalized_utterance, token)
            })
        })
    }

    /// Find the first app whose name or any keyword appears in the utterance.
    pub fn match_app(&self, normalized_utterance: &str) -> Option<&AppShortcut> {
        self.apps.iter().find(|app| {
            contains_word(normalized_utterance, &app.name.to_lowercase())
                || app
                    .keywords
                    .iter()
                    .any(|keyword| contains_word(normalized_utterance, &keyword.to_lowercase()))
        })
    }
}

/// Whole-word containment check over whitespace-separated text.
fn contains_word(text: &str, word: &str) -> bool {
    if word.contains(' ') {
        return text.contains(word);
    }
    text.split_whitespace().any(|w| w == word)
}

impl Default for ReferenceDirectory {
    /// Built-in demo roster used when no config file is present.
    fn default() -> Self {
        Self {
            contacts: vec![
                Contact {
                    name: "Alex Chen".to_string(),
                    phone: "+1 415 555 0119".to_string(),
                    tags: vec!["work".to_string(), "favorites".to_string()],
                },
                Contact {
                    name: "Priya Natarajan".to_string(),
                    phone: "+1 206 555 0187".to_string(),
                    tags: vec!["family".to_string()],
                },
                Contact {
                    name: "Marcus Webb".to_string(),
                    phone: "+44 20 7946 0358".to_string(),
                    tags: vec!["work".to_string()],
                },
                Contact {
                    name: "Sofia Reyes".to_string(),
                    phone: "+1 312 555 042".to_string(),
                    tags: vec!["friends".to_string(), "favorites".to_string()],
                },
            ],
            apps: vec![
                AppShortcut {
                    id: "music".to_string(),
                    name: "Music".to_string(),
                    keywords: vec![
                        "music".to_string(),
                        "playlist".to_string(),
                        "song".to_string(),
                    ],
                    description: "Queueing up your recent mix.".to_string(),
                },
                AppShortcut {
                    id: "maps".to_string(),
                    name: "Maps".to_string(),
                    keywords: vec![
                        "maps".to_string(),
                        "navigate".to_string(),
                        "directions".to_string(),
                    ],
                    description: "Plotting the fastest route.".to_string(),
                },
                AppShortcut {
                    id: "calendar".to_string(),
                    name: "Calendar".to_string(),
                    keywords: vec![
                        "calendar".to_string(),
                        "agenda".to_string(),
                        "meeting".to_string(),
                    ],
                    description: "Showing today's agenda.".to_string(),
                },
                AppShortcut {
                    id: "weather".to_string(),
                    name: "Weather".to_string(),
                    keywords: vec!["weather".to_string(), "forecast".to_string()],
                    description: "Pulling the local forecast.".to_string(),
                },
            ],
        }
    }
}

/// Built-in quick-action playbooks shown by the presentation layer.
pub fn default_quick_actions() -> Vec<QuickActionGroup> {
    vec![
        QuickActionGroup {
            category: "Comms".to_string(),
            items: vec![
                QuickAction {
                    title: "Call Alex".to_string(),
                    prompt: "Call Alex Chen".to_string(),
                    hint: "voice".to_string(),
                },
                QuickAction {
                    title: "Text Priya".to_string(),
                    prompt: "Send a message to Priya".to_string(),
                    hint: "sms".to_string(),
                },
            ],
        },
        QuickActionGroup {
            category: "Daily".to_string(),
            items: vec![
                QuickAction {
                    title: "Morning mix".to_string(),
                    prompt: "Play some music".to_string(),
                    hint: "media".to_string(),
                },
                QuickAction {
                    title: "Standup reminder".to_string(),
                    prompt: "Remind me about standup at 9".to_string(),
                    hint: "routine".to_string(),
                },
            ],
        },
    ]
}
