//! Configuration management for the assistant.
//!
//! Loads settings from a TOML file or falls back to built-in defaults: the
//! reference directory (contacts, app shortcuts), quick-action playbooks,
//! and speech capture options.

use std::fs;
use std::path::Path;

use aria_common::directory::default_quick_actions;
use aria_common::{AriaError, QuickActionGroup, ReferenceDirectory};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default config file path.
pub const CONFIG_PATH: &str = "/etc/aria/config.toml";

/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "ARIA_CONFIG";

/// Speech capture options passed to the device integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Recognition language
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Keep capturing after the first finalized chunk
    #[serde(default)]
    pub continuous: bool,

    /// Deliver interim hypotheses as well as finals
    #[serde(default = "default_interim_results")]
    pub interim_results: bool,
}

fn default_lang() -> String {
    "en-US".to_string()
}

fn default_interim_results() -> bool {
    true
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            continuous: false,
            interim_results: default_interim_results(),
        }
    }
}

/// Top-level assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub directory: ReferenceDirectory,

    #[serde(default = "default_quick_actions")]
    pub quick_actions: Vec<QuickActionGroup>,

    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            directory: ReferenceDirectory::default(),
            quick_actions: default_quick_actions(),
            speech: SpeechConfig::default(),
        }
    }
}

impl AssistantConfig {
    pub fn load(path: &Path) -> Result<Self, AriaError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path`, falling back to built-in defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded assistant config");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "using built-in config");
                Self::default()
            }
        }
    }

    /// Resolve the config path from the environment or the default location.
    pub fn resolve_path() -> String {
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string())
    }
}
