//! Exec command implementation

use std::process::Command;

use crate::context::CliContext;
use crate::error::{CliError, Result};

/// Run a command inside the rebuilt environment and return its exit code
pub fn run_exec(ctx: &CliContext, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| CliError::user("No command given"))?;

    let report = ctx.run()?;
    let mut child = Command::new(program);
    child.args(args);
    report.environment.apply_to_command(&mut child);

    tracing::debug!(program, ?args, "Running command");
    let status = child
        .status()
        .map_err(|e| CliError::user(format!("Failed to run {}: {}", program, e)))?;

    // Signals leave no exit code
    Ok(status.code().unwrap_or(1))
}
