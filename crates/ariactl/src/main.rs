//! Aria Control - CLI for the Aria assistant emulation.
//!
//! Runs the pipeline in-process: one-shot `ask`, an interactive console, the
//! reference directory listing, and a scripted speech capture demo.

mod cli;
mod commands;
mod display;

use std::path::Path;

use anyhow::Result;
use ariad::config::AssistantConfig;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AssistantConfig::resolve_path);
    let config = AssistantConfig::load_or_default(Path::new(&config_path));

    match cli.command {
        Some(Commands::Ask { text, json }) => commands::ask(config, &text.join(" "), json),
        Some(Commands::Repl) | None => commands::repl(config),
        Some(Commands::Directory) => commands::directory(config),
        Some(Commands::Demo) => commands::demo(config),
    }
}
