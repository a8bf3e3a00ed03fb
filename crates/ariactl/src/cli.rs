//! CLI - command-line argument parsing.
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};

/// Aria assistant CLI
#[derive(Parser)]
#[command(name = "ariactl")]
#[command(about = "Aria Assistant - voice-first command emulation", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to the assistant config file (overrides $ARIA_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Subcommand (if not provided, starts the interactive console)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run one command through the pipeline and print the outcome
    Ask {
        /// Command text, e.g. "call Alex Chen"
        text: Vec<String>,

        /// Print the full observable snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive console: one command per line
    Repl,

    /// Show the reference directory and quick-action playbooks
    Directory,

    /// Replay a scripted speech capture session through the pipeline
    Demo,
}
