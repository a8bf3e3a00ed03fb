//! Error types for Aria.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AriaError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Classifier produced an invalid intent: {0}")]
    Classifier(String),

    #[error("Recognition device error: {0}")]
    Device(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
