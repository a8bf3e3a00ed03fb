//! Command implementations for ariactl.
//!
//! Everything runs in-process against its own pipeline instance; the
//! emulation has no daemon to talk to.

use anyhow::Result;
use aria_common::QuickAction;
use ariad::config::AssistantConfig;
use ariad::pipeline::Assistant;
use ariad::speech::{CaptureStatus, DeviceError, DeviceEvent, RecognitionDevice, SpeechSession};
use console::Term;
use owo_colors::OwoColorize;

use crate::display;

/// Run one command through the pipeline and print outcome plus metrics.
pub fn ask(config: AssistantConfig, text: &str, json: bool) -> Result<()> {
    let mut assistant = Assistant::new(config.directory);
    assistant.submit_command(text);

    let snapshot = assistant.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if let Some(record) = snapshot.commands.first() {
        if let Some(outcome) = &record.outcome {
            display::print_outcome(outcome);
        }
        if let Some(intent) = &record.parsed_intent {
            println!(
                "{} {} ({}% confidence)",
                "intent:".dimmed(),
                intent.action,
                (intent.confidence * 100.0).round() as u32
            );
        }
    } else {
        println!("{}", "nothing to do: blank command".dimmed());
    }
    Ok(())
}

/// Interactive console. One command per line; `reset`, `timeline`, a quick
/// action number, or `exit`.
pub fn repl(config: AssistantConfig) -> Result<()> {
    let term = Term::stdout();
    let quick: Vec<QuickAction> = config
        .quick_actions
        .iter()
        .flat_map(|group| group.items.iter().cloned())
        .collect();
    let mut assistant = Assistant::new(config.directory.clone());

    println!(
        "Aria console. Type a command, a playbook number (1-{}), `timeline`, `reset`, or `exit`.",
        quick.len()
    );
    display::print_directory(&config.directory, &config.quick_actions);

    loop {
        term.write_str(&format!("{} ", "aria>".cyan()))?;
        let line = match term.read_line() {
            Ok(line) => line,
            Err(_) => break,
        };
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        match input.as_str() {
            "exit" | "quit" => break,
            "reset" => {
                assistant.reset_timeline();
                println!("{}", "timeline cleared".dimmed());
            }
            "timeline" => display::print_timeline(&assistant.snapshot()),
            other => {
                // A bare number fires the matching playbook prompt.
                let text = match other.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= quick.len() => quick[n - 1].prompt.clone(),
                    _ => other.to_string(),
                };
                assistant.submit_command(&text);
                let snapshot = assistant.snapshot();
                if let Some(outcome) = snapshot.commands.first().and_then(|r| r.outcome.as_ref()) {
                    display::print_outcome(outcome);
                }
                display::print_metrics(&snapshot.metrics);
            }
        }
    }
    Ok(())
}

/// Show the reference directory and playbooks.
pub fn directory(config: AssistantConfig) -> Result<()> {
    display::print_directory(&config.directory, &config.quick_actions);
    Ok(())
}

/// Device whose start/stop always succeed; events come from the script below.
struct ScriptedDevice;

impl RecognitionDevice for ScriptedDevice {
    fn start(&mut self) -> Result<(), DeviceError> {
        Ok(())
    }
    fn stop(&mut self) {}
}

/// Replay a scripted capture session: interim results update the transcript,
/// finalized chunks are dispatched into the pipeline exactly once each.
pub fn demo(config: AssistantConfig) -> Result<()> {
    let mut assistant = Assistant::new(config.directory);
    let mut session = SpeechSession::new(Some(ScriptedDevice));

    let script = vec![
        DeviceEvent::Started,
        DeviceEvent::Interim("call al".to_string()),
        DeviceEvent::Interim("call alex ch".to_string()),
        DeviceEvent::Final("call Alex Chen".to_string()),
        DeviceEvent::Interim("play some mu".to_string()),
        DeviceEvent::Final("play some music".to_string()),
        DeviceEvent::Ended,
    ];

    session.start();
    println!("{} listening...", "[capture]".cyan());
    for event in script {
        match &event {
            DeviceEvent::Interim(text) => println!("{} {}", "[interim]".dimmed(), text.dimmed()),
            DeviceEvent::Final(text) => println!("{} {}", "[final]".green(), text),
            DeviceEvent::Ended => println!("{} session ended", "[capture]".cyan()),
            _ => {}
        }
        session.handle_event(event, |chunk| assistant.submit_command(chunk));
    }
    if session.status() != CaptureStatus::Idle {
        println!("{} session did not settle to idle", "[capture]".red());
    }

    println!();
    display::print_timeline(&assistant.snapshot());
    Ok(())
}
