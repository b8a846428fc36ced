//! Version resolution with directory-scoped precedence
//!
//! The `VersionResolver` picks one version per tool by consulting, in order:
//! 1. The `.tool-versions` nearest to the active file
//! 2. The `.tool-versions` nearest to each open folder (deepest file wins)
//! 3. `~/.tool-versions`
//! 4. The global default at `<root>/version/<tool>`
//!
//! The first level that declares the tool wins. Missing files at any level
//! simply fall through to the next.

use std::fmt;

use serde::Serialize;
use toolenv_fs::{NormalizedPath, io};

use crate::host::Host;
use crate::layout::AsdfLayout;
use crate::tool_versions::{ToolVersions, locate};

/// Inputs for one resolution pass.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    /// Directory of the active file, if any
    pub active_dir: Option<NormalizedPath>,
    /// Open folders of the active window
    pub folders: Vec<NormalizedPath>,
    /// Home directory and version-manager root
    pub layout: AsdfLayout,
}

impl ResolutionContext {
    /// A context with no active file and no open folders.
    pub fn new(layout: AsdfLayout) -> Self {
        Self {
            active_dir: None,
            folders: Vec::new(),
            layout,
        }
    }

    /// Build the context from the host's current state.
    ///
    /// The active directory is the parent directory of the active file.
    pub fn from_host(host: &dyn Host, layout: AsdfLayout) -> Self {
        let active_dir = host
            .active_file()
            .and_then(|file| NormalizedPath::absolute(file).parent());
        let folders = host
            .folders()
            .into_iter()
            .map(NormalizedPath::absolute)
            .collect();
        Self {
            active_dir,
            folders,
            layout,
        }
    }

    pub fn with_active_dir(mut self, dir: impl Into<NormalizedPath>) -> Self {
        self.active_dir = Some(dir.into());
        self
    }

    pub fn with_folders<I, P>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<NormalizedPath>,
    {
        self.folders = folders.into_iter().map(Into::into).collect();
        self
    }
}

/// Where a resolved version was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum VersionSource {
    /// `.tool-versions` above the active file
    ActiveFile(String),
    /// `.tool-versions` above an open folder
    Folder(String),
    /// `~/.tool-versions`
    Home(String),
    /// `<root>/version/<tool>`
    Global(String),
}

impl VersionSource {
    /// The file the version was read from.
    pub fn path(&self) -> &str {
        match self {
            Self::ActiveFile(p) | Self::Folder(p) | Self::Home(p) | Self::Global(p) => p,
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::ActiveFile(_) => "active file",
            Self::Folder(_) => "open folder",
            Self::Home(_) => "home",
            Self::Global(_) => "global default",
        };
        write!(f, "{} ({})", level, self.path())
    }
}

/// A tool version together with the file that declared it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub tool: String,
    pub version: String,
    pub source: VersionSource,
}

/// Applies the precedence rules for one [`ResolutionContext`].
pub struct VersionResolver<'a> {
    context: &'a ResolutionContext,
}

impl<'a> VersionResolver<'a> {
    pub fn new(context: &'a ResolutionContext) -> Self {
        Self { context }
    }

    /// Resolve the version of `tool`, or `None` when no level declares it.
    pub fn resolve(&self, tool: &str) -> Option<ResolvedVersion> {
        let found = self
            .from_active_dir(tool)
            .or_else(|| self.from_folders(tool))
            .or_else(|| self.from_home(tool))
            .or_else(|| self.from_global(tool));

        match &found {
            Some((version, source)) => {
                tracing::debug!(tool, version = %version, %source, "Resolved version")
            }
            None => tracing::debug!(tool, "No version declared"),
        }

        found.map(|(version, source)| ResolvedVersion {
            tool: tool.to_string(),
            version,
            source,
        })
    }

    fn from_active_dir(&self, tool: &str) -> Option<(String, VersionSource)> {
        let dir = self.context.active_dir.as_ref()?;
        let path = locate(dir)?;
        let version = ToolVersions::load(Some(&path)).get(tool)?.to_string();
        Some((version, VersionSource::ActiveFile(path.to_string())))
    }

    /// Among the folders whose nearest file declares `tool`, pick the file
    /// with the most path segments. Ties keep the earlier folder.
    fn from_folders(&self, tool: &str) -> Option<(String, VersionSource)> {
        let mut deepest: Option<(usize, String, NormalizedPath)> = None;

        for folder in &self.context.folders {
            let Some(path) = locate(folder) else {
                continue;
            };
            let Some(version) = ToolVersions::load(Some(&path)).get(tool).map(String::from) else {
                continue;
            };
            let depth = path.segment_count();
            if deepest.as_ref().is_none_or(|(best, _, _)| depth > *best) {
                deepest = Some((depth, version, path));
            }
        }

        deepest.map(|(_, version, path)| (version, VersionSource::Folder(path.to_string())))
    }

    fn from_home(&self, tool: &str) -> Option<(String, VersionSource)> {
        let path = self.context.layout.home_tool_versions();
        let version = ToolVersions::load(Some(&path)).get(tool)?.to_string();
        Some((version, VersionSource::Home(path.to_string())))
    }

    fn from_global(&self, tool: &str) -> Option<(String, VersionSource)> {
        let path = self.context.layout.global_version_file(tool);
        if !path.is_file() {
            return None;
        }
        let content = match io::read_text(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(tool, "Could not read global version: {}", e);
                return None;
            }
        };
        let version = content.trim();
        if version.is_empty() {
            return None;
        }
        Some((version.to_string(), VersionSource::Global(path.to_string())))
    }
}

/// Resolve just the version string of `tool`.
pub fn get_tool_version(tool: &str, context: &ResolutionContext) -> Option<String> {
    VersionResolver::new(context)
        .resolve(tool)
        .map(|resolved| resolved.version)
}
