//! Resolve command implementation

use colored::Colorize;
use toolenv_core::VersionResolver;

use crate::context::CliContext;
use crate::error::{CliError, Result};

/// Run the resolve command
pub fn run_resolve(ctx: &CliContext, tool: &str) -> Result<()> {
    let context = ctx.resolution_context();
    let resolved = VersionResolver::new(&context)
        .resolve(tool)
        .ok_or_else(|| CliError::user(format!("No version set for {}", tool)))?;

    let state = if ctx.orchestrator.layout().is_installed(tool, &resolved.version) {
        "installed".green()
    } else {
        "not installed".yellow()
    };

    println!("{} {} ({})", resolved.tool.cyan(), resolved.version, state);
    println!("{}: {}", "Source".dimmed(), resolved.source);
    Ok(())
}
