//! Aria engine library - exposes modules for testing.

pub mod classifier;
pub mod config;
pub mod ledger;
pub mod pipeline;
pub mod simulator;
pub mod speech;
