//! toolenv CLI
//!
//! Rebuilds PATH and tool variables from asdf `.tool-versions` files for a
//! project context.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::CliContext;
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let ctx = CliContext::from_cli(&cli)?;

    if let Err(e) = logging::init(cli.verbose || ctx.settings().debug) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(home = ?cli.home, "Starting toolenv");

    let command = cli.command.unwrap_or(Commands::Reload { json: false });
    execute_command(&ctx, command)
}

fn execute_command(ctx: &CliContext, cmd: Commands) -> Result<i32> {
    match cmd {
        Commands::Reload { json } => commands::run_reload(ctx, json).map(|_| 0),
        Commands::Show => commands::run_show(ctx).map(|_| 0),
        Commands::Env => commands::run_env(ctx).map(|_| 0),
        Commands::Resolve { tool } => commands::run_resolve(ctx, &tool).map(|_| 0),
        Commands::Exec { command } => commands::run_exec(ctx, &command),
    }
}
