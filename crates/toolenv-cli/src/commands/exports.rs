//! Env command implementation

use crate::context::CliContext;
use crate::error::Result;

/// Run the env command, printing `export` lines for `eval`
pub fn run_env(ctx: &CliContext) -> Result<()> {
    let report = ctx.run()?;
    for line in report.environment.shell_exports() {
        println!("{}", line);
    }
    Ok(())
}
