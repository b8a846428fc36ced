//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// toolenv - Activate asdf tool versions for a project context
#[derive(Parser, Debug)]
#[command(name = "toolenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Home directory containing .asdf and .tool-versions
    #[arg(long, env = "HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Settings file (defaults to <config dir>/toolenv/settings.toml)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Active file; its directory is searched first
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Open folder (repeatable); defaults to the current directory
    #[arg(long = "folder", global = true)]
    pub folders: Vec<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rebuild the environment and report the configured tools
    Reload {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show PATH and the tool variables of the rebuilt environment
    Show,

    /// Print shell export statements
    ///
    /// Examples:
    ///   eval "$(toolenv env)"
    Env,

    /// Show which version of a tool is selected and where it is declared
    Resolve {
        /// Tool name as used in .tool-versions (e.g. nodejs)
        tool: String,
    },

    /// Run a command inside the rebuilt environment
    ///
    /// Examples:
    ///   toolenv exec -- node --version
    Exec {
        /// Command and its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}
