//! Shared data model for the Aria assistant.
//!
//! Pure types only: intents, outcomes, command records, metrics, and the
//! read-only reference directory. All logic lives in the `ariad` engine.

pub mod command;
pub mod directory;
pub mod error;
pub mod intent;
pub mod metrics;
pub mod outcome;

pub use command::{CommandId, CommandRecord, CommandStatus};
pub use directory::{AppShortcut, Contact, QuickAction, QuickActionGroup, ReferenceDirectory};
pub use error::AriaError;
pub use intent::{Intent, IntentAction, IntentEntities};
pub use metrics::Metrics;
pub use outcome::Outcome;
