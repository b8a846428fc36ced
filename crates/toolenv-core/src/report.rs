//! Results of an orchestration run and their display forms

use std::fmt;

use serde::Serialize;

use crate::environment::EnvironmentState;
use crate::resolver::VersionSource;
use crate::verify::ToolLocation;

/// A tool whose resolved version was found installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfiguredTool {
    pub tool: String,
    pub version: String,
    pub source: VersionSource,
    /// Variables and PATH entries actually applied
    pub actions: Vec<String>,
}

impl fmt::Display for ConfiguredTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.tool, self.version)
    }
}

/// An installed tool that was left out of the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkippedTool {
    /// No level declares a version
    Unresolved { tool: String },
    /// The resolved version has no install directory
    NotInstalled {
        tool: String,
        version: String,
        install_path: String,
    },
}

impl SkippedTool {
    pub fn tool(&self) -> &str {
        match self {
            Self::Unresolved { tool } | Self::NotInstalled { tool, .. } => tool,
        }
    }
}

/// Host commands to re-invoke once the new environment is in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    /// Language servers started under the old environment must restart
    RestartLanguageServers,
}

impl FollowUp {
    /// Command name understood by the host.
    pub fn command(&self) -> &'static str {
        match self {
            Self::RestartLanguageServers => "lsp_restart_server",
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Configured tools in installation-directory order
    pub configured: Vec<ConfiguredTool>,
    pub skipped: Vec<SkippedTool>,
    /// The environment to hand to the host
    pub environment: EnvironmentState,
    /// Status bar text, when enabled and non-empty
    pub status: Option<String>,
    /// Verification results (debug mode only)
    pub verified: Vec<ToolLocation>,
    pub follow_up: Vec<FollowUp>,
}

impl RunReport {
    /// `name@version` for every configured tool.
    pub fn configured_names(&self) -> Vec<String> {
        self.configured.iter().map(ToString::to_string).collect()
    }

    /// Status text for the configured tools, or `None` when there are none.
    pub fn status_text(configured: &[ConfiguredTool]) -> Option<String> {
        if configured.is_empty() {
            return None;
        }
        let names: Vec<String> = configured.iter().map(ToString::to_string).collect();
        Some(format!("asdf: {}", names.join(", ")))
    }
}

/// Lines describing PATH, ASDF_DIR and the tool variables that are set.
pub fn environment_dump(env: &EnvironmentState) -> Vec<String> {
    let mut lines = vec![
        format!("PATH: {}", env.path_string()),
        format!("ASDF_DIR: {}", env.var("ASDF_DIR").unwrap_or("Not set")),
    ];
    for (name, value) in env.tracked_vars().skip(2) {
        if let Some(value) = value {
            lines.push(format!("{name}: {value}"));
        }
    }
    lines
}
