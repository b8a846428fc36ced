//! Paths inside the version-manager root

use std::path::PathBuf;

use toolenv_fs::{AsdfPath, NormalizedPath, io};

use crate::{Error, Result};

/// Location of the home directory and the version-manager root beneath it.
///
/// ```text
/// <home>/.tool-versions
/// <home>/.asdf/
///   installs/<tool>/<version>/
///   shims/
///   bin/
///   version/<tool>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsdfLayout {
    home: NormalizedPath,
    root: NormalizedPath,
}

impl AsdfLayout {
    /// Layout rooted at `<home>/.asdf`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = NormalizedPath::absolute(home.into());
        let root = home.join(AsdfPath::Root.as_str());
        Self { home, root }
    }

    /// Layout for the current user's home directory.
    pub fn detect() -> Result<Self> {
        dirs::home_dir().map(Self::new).ok_or(Error::HomeNotFound)
    }

    pub fn home(&self) -> &NormalizedPath {
        &self.home
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Whether the version-manager root directory exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn installs(&self) -> NormalizedPath {
        self.root.join(AsdfPath::Installs.as_str())
    }

    /// `<root>/installs/<tool>/<version>`
    pub fn install_path(&self, tool: &str, version: &str) -> NormalizedPath {
        self.installs().join(tool).join(version)
    }

    /// Whether anything exists at the install path of `tool` `version`.
    pub fn is_installed(&self, tool: &str, version: &str) -> bool {
        self.install_path(tool, version).exists()
    }

    pub fn shims(&self) -> NormalizedPath {
        self.root.join(AsdfPath::Shims.as_str())
    }

    pub fn bin(&self) -> NormalizedPath {
        self.root.join(AsdfPath::Bin.as_str())
    }

    /// `<root>/version/<tool>`
    pub fn global_version_file(&self, tool: &str) -> NormalizedPath {
        self.root.join(AsdfPath::GlobalVersions.as_str()).join(tool)
    }

    /// `<home>/.tool-versions`
    pub fn home_tool_versions(&self) -> NormalizedPath {
        self.home.join(AsdfPath::ToolVersions.as_str())
    }

    /// Names of the installed tools, sorted. Hidden entries are excluded and
    /// a missing `installs` directory yields an empty list.
    pub fn installed_tools(&self) -> Result<Vec<String>> {
        let installs = self.installs();
        if !installs.is_dir() {
            return Ok(Vec::new());
        }
        Ok(io::list_dirs(&installs)?)
    }
}
