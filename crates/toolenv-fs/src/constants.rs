//! Fixed names of the version-manager filesystem layout.

use std::path::Path;

/// Well-known files and directories read by toolenv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsdfPath {
    /// The `.tool-versions` declaration file
    ToolVersions,
    /// The `.asdf` version-manager root, relative to the home directory
    Root,
    /// The `installs` directory (`<root>/installs/<tool>/<version>`)
    Installs,
    /// The `shims` directory
    Shims,
    /// The `bin` directory
    Bin,
    /// The `version` directory holding per-tool global defaults
    GlobalVersions,
}

impl AsdfPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolVersions => ".tool-versions",
            Self::Root => ".asdf",
            Self::Installs => "installs",
            Self::Shims => "shims",
            Self::Bin => "bin",
            Self::GlobalVersions => "version",
        }
    }
}

impl AsRef<Path> for AsdfPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for AsdfPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for AsdfPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
