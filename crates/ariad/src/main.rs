//! Aria daemon - interactive assistant loop.
//!
//! Reads one command per stdin line, runs it through the pipeline, and prints
//! the simulated outcome plus the timeline metrics. Ctrl-C or EOF exits.

use std::path::Path;

use anyhow::Result;
use ariad::config::AssistantConfig;
use ariad::pipeline::Assistant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("ariad v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = AssistantConfig::resolve_path();
    let config = AssistantConfig::load_or_default(Path::new(&config_path));
    info!(
        contacts = config.directory.contacts.len(),
        apps = config.directory.apps.len(),
        "reference directory loaded"
    );

    let mut assistant = Assistant::new(config.directory.clone());
    info!("ariad ready; type a command, `reset` to clear the timeline");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "reset" {
                    assistant.reset_timeline();
                    println!("timeline cleared");
                    continue;
                }

                assistant.submit_command(trimmed);
                let snapshot = assistant.snapshot();
                if let Some(record) = snapshot.commands.first() {
                    if let Some(outcome) = &record.outcome {
                        println!("{}: {}", outcome.title, outcome.details);
                    }
                }
                let metrics = snapshot.metrics;
                println!(
                    "-- {} commands | {}% success | {}% avg confidence",
                    metrics.total, metrics.success_rate, metrics.average_confidence
                );
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    info!("shutting down gracefully");
    Ok(())
}
