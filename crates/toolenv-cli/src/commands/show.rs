//! Show command implementation

use colored::Colorize;
use toolenv_core::environment_dump;

use crate::context::CliContext;
use crate::error::Result;

/// Run the show command
pub fn run_show(ctx: &CliContext) -> Result<()> {
    let report = ctx.run()?;

    println!("{}", "Current Environment".bold());
    println!();
    for line in environment_dump(&report.environment) {
        println!("{}", line);
    }
    Ok(())
}
