//! Reload command implementation

use colored::Colorize;
use toolenv_core::{RunReport, SkippedTool};

use crate::context::CliContext;
use crate::error::Result;

/// Run the reload command
pub fn run_reload(ctx: &CliContext, json: bool) -> Result<()> {
    let report = ctx.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    println!();
    println!("{}", "asdf environment reloaded".green());
    Ok(())
}

fn print_report(report: &RunReport) {
    println!("{}:", "Configured Tools".bold());
    if report.configured.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for tool in &report.configured {
        println!(
            "  {} {:<20} {}",
            "+".green(),
            tool.to_string().cyan(),
            tool.source.to_string().dimmed()
        );
    }

    if !report.skipped.is_empty() {
        println!();
        println!("{}:", "Skipped".bold());
        for skipped in &report.skipped {
            let reason = match skipped {
                SkippedTool::Unresolved { .. } => "no version set".to_string(),
                SkippedTool::NotInstalled { version, .. } => {
                    format!("{} not installed", version)
                }
            };
            println!(
                "  {} {:<20} {}",
                "-".yellow(),
                skipped.tool(),
                reason.dimmed()
            );
        }
    }

    if let Some(status) = &report.status {
        println!();
        println!("{}", status);
    }

    if !report.verified.is_empty() {
        println!();
        println!("{}:", "Verified".bold());
        for location in &report.verified {
            println!("  {} {}: {}", "✓".green(), location.command, location.path);
        }
    }

    if !report.follow_up.is_empty() {
        println!();
        println!("{}:", "Follow-up".bold());
        for follow_up in &report.follow_up {
            println!("  {} {}", "→".cyan(), follow_up.command());
        }
    }
}
