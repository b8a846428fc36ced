//! `.tool-versions` discovery and parsing
//!
//! Files are re-read on every call; nothing is cached so an edited file takes
//! effect on the next resolution.

use std::collections::HashMap;
use std::path::Path;

use toolenv_fs::{AsdfPath, NormalizedPath, io};

/// Find the nearest `.tool-versions` at or above `start_dir`.
///
/// The walk starts at the absolute form of `start_dir` and stops at the
/// filesystem root. A missing or unreadable start directory is simply
/// "not found".
pub fn locate(start_dir: impl AsRef<Path>) -> Option<NormalizedPath> {
    let mut current = NormalizedPath::absolute(start_dir);
    loop {
        let candidate = current.join(AsdfPath::ToolVersions.as_str());
        if candidate.is_file() {
            tracing::debug!(path = %candidate, "Found .tool-versions");
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Tool name to requested version, as declared in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolVersions {
    entries: HashMap<String, String>,
}

impl ToolVersions {
    /// Parse declaration file content.
    ///
    /// Blank lines and lines starting with `#` are skipped. A line needs at
    /// least two whitespace separated tokens; extra tokens are ignored and a
    /// later line for the same tool replaces an earlier one.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut tokens = line.split_whitespace();
            if let (Some(tool), Some(version)) = (tokens.next(), tokens.next()) {
                entries.insert(tool.to_string(), version.to_string());
            }
        }
        Self { entries }
    }

    /// Load and parse a declaration file.
    ///
    /// `None`, a missing file or an unreadable file all produce an empty
    /// mapping.
    pub fn load(path: Option<&NormalizedPath>) -> Self {
        let Some(path) = path.filter(|p| p.is_file()) else {
            return Self::default();
        };
        match io::read_text(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!(%path, "Could not read .tool-versions: {}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, tool: &str) -> Option<&str> {
        self.entries.get(tool).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
