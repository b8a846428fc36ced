//! Environment state built by an orchestration run
//!
//! The state is a plain value: an ordered PATH plus a variable map. The
//! core mutates only this value; the host applies it as a single update.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::process::Command;

use serde::Serialize;

/// PATH a run starts from, regardless of what was set before.
pub const BASELINE_PATH: &[&str] = &["/usr/local/bin", "/usr/bin", "/bin", "/usr/sbin", "/sbin"];

/// Variables reported by [`crate::environment_dump`] and exported by
/// [`EnvironmentState::shell_exports`], in display order.
pub const TRACKED_VARS: &[&str] = &[
    "ASDF_DIR",
    "ASDF_DATA_DIR",
    "GOROOT",
    "GOPATH",
    "NODE_PATH",
    "GEM_PATH",
    "CARGO_HOME",
];

#[cfg(windows)]
const PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const PATH_SEPARATOR: &str = ":";

/// Ordered PATH entries (highest priority first) and environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvironmentState {
    path: Vec<String>,
    vars: BTreeMap<String, String>,
}

impl EnvironmentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the given variables. `PATH` is split into entries.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut state = Self::default();
        for (key, value) in vars {
            let (key, value) = (key.into(), value.into());
            if key == "PATH" {
                state.path = value
                    .split(PATH_SEPARATOR)
                    .filter(|entry| !entry.is_empty())
                    .map(String::from)
                    .collect();
            } else {
                state.vars.insert(key, value);
            }
        }
        state
    }

    /// Snapshot the current process environment. Non UTF-8 variables are
    /// left out.
    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(k, v): (OsString, OsString)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    /// Replace PATH entirely.
    pub fn reset_path(&mut self, entries: &[&str]) {
        self.path = entries.iter().map(|e| e.to_string()).collect();
    }

    /// Put `entry` in front of PATH unless it is already present.
    ///
    /// Returns whether PATH changed.
    pub fn prepend_path(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        if self.path.contains(&entry) {
            return false;
        }
        self.path.insert(0, entry);
        true
    }

    pub fn path_entries(&self) -> &[String] {
        &self.path
    }

    /// PATH joined with the platform separator.
    pub fn path_string(&self) -> String {
        self.path.join(PATH_SEPARATOR)
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Tracked variable names with their current values.
    pub fn tracked_vars(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        TRACKED_VARS.iter().map(|name| (*name, self.var(name)))
    }

    /// Hand the whole state to a child process.
    pub fn apply_to_command(&self, command: &mut Command) {
        command.env("PATH", self.path_string());
        command.envs(self.vars.iter());
    }

    /// `export` lines for PATH and every tracked variable that is set.
    pub fn shell_exports(&self) -> Vec<String> {
        let mut lines = vec![format!("export PATH={}", shell_quote(&self.path_string()))];
        for (name, value) in self.tracked_vars() {
            if let Some(value) = value {
                lines.push(format!("export {}={}", name, shell_quote(value)));
            }
        }
        lines
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
