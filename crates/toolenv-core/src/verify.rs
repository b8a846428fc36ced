//! Diagnostic lookup of tool executables on the constructed PATH

use std::process::{Command, Stdio};

use serde::Serialize;

use crate::environment::EnvironmentState;

/// Where a command was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolLocation {
    pub command: String,
    pub path: String,
}

/// Look up each command with `which` under `env`.
///
/// Commands that are not found, and lookups that fail to run at all, are
/// left out of the result.
pub fn verify_tools(commands: &[String], env: &EnvironmentState) -> Vec<ToolLocation> {
    commands
        .iter()
        .filter_map(|command| {
            which(command, env).map(|path| ToolLocation {
                command: command.clone(),
                path,
            })
        })
        .collect()
}

fn which(command: &str, env: &EnvironmentState) -> Option<String> {
    let output = Command::new("which")
        .arg(command)
        .env("PATH", env.path_string())
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!path.is_empty()).then_some(path)
}
