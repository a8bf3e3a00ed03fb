//! Terminal rendering of the assistant's observable snapshot.

use aria_common::{CommandStatus, Metrics, Outcome, QuickActionGroup, ReferenceDirectory};
use ariad::ledger::LedgerSnapshot;
use owo_colors::OwoColorize;

pub fn print_outcome(outcome: &Outcome) {
    println!(
        "{} {}",
        format!("[{}]", outcome.title).cyan().bold(),
        outcome.details
    );
}

pub fn print_metrics(metrics: &Metrics) {
    println!(
        "{} {} commands | {}% success | {}% avg confidence",
        "--".dimmed(),
        metrics.total,
        metrics.success_rate.green(),
        metrics.average_confidence
    );
}

pub fn print_timeline(snapshot: &LedgerSnapshot) {
    if snapshot.commands.is_empty() {
        println!("{}", "timeline empty".dimmed());
        return;
    }
    for record in &snapshot.commands {
        let status = match record.status {
            CommandStatus::Processing => "processing".yellow().to_string(),
            CommandStatus::Completed => "completed".green().to_string(),
            CommandStatus::Failed => "failed".red().to_string(),
        };
        let confidence = record
            .parsed_intent
            .as_ref()
            .map(|intent| format!("{}%", (intent.confidence * 100.0).round() as u32))
            .unwrap_or_else(|| "-".to_string());
        let action = record
            .parsed_intent
            .as_ref()
            .map(|intent| intent.action.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<10} {:<12} {:>4}  {}",
            status,
            action.bold(),
            confidence,
            record.input.dimmed()
        );
    }
    print_metrics(&snapshot.metrics);
}

pub fn print_directory(directory: &ReferenceDirectory, quick_actions: &[QuickActionGroup]) {
    println!("{}", "Contacts".bold());
    for contact in &directory.contacts {
        println!(
            "  {:<18} {:<18} {}",
            contact.name,
            contact.phone.dimmed(),
            contact.tags.join(", ").dimmed()
        );
    }

    println!("{}", "Apps".bold());
    for app in &directory.apps {
        println!(
            "  {:<18} {}",
            app.name,
            app.keywords.join(", ").dimmed()
        );
    }

    println!("{}", "Playbooks".bold());
    let mut index = 1;
    for group in quick_actions {
        println!("  {}", group.category.cyan());
        for item in &group.items {
            println!(
                "    {}. {:<18} {} {}",
                index,
                item.title,
                item.prompt.dimmed(),
                format!("[{}]", item.hint).dimmed()
            );
            index += 1;
        }
    }
}
