//! [`TestAsdf`] builder for resolution and orchestration scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary home directory containing `.asdf/`.
///
/// # Example
///
/// ```rust,no_run
/// use toolenv_test_utils::TestAsdf;
///
/// let asdf = TestAsdf::new();
/// asdf.install("nodejs", "18.0.0", &["bin"]);
/// asdf.tool_versions("proj", "nodejs 18.0.0\n");
/// assert!(asdf.root().join("installs/nodejs/18.0.0/bin").is_dir());
/// ```
pub struct TestAsdf {
    temp_dir: TempDir,
}

impl Default for TestAsdf {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAsdf {
    /// Create a home directory with an empty `.asdf/` root.
    pub fn new() -> Self {
        let asdf = Self::without_root();
        fs::create_dir_all(asdf.root()).unwrap();
        asdf
    }

    /// Create a home directory without a version-manager root.
    pub fn without_root() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The fake home directory.
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `<home>/.asdf`
    pub fn root(&self) -> PathBuf {
        self.home().join(".asdf")
    }

    /// Create `path` (relative to home) and its parents.
    pub fn mkdir(&self, path: &str) -> PathBuf {
        let dir = self.home().join(path);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `<home>/<dir>/.tool-versions`, creating `dir` as needed.
    pub fn tool_versions(&self, dir: &str, content: &str) -> PathBuf {
        let file = self.mkdir(dir).join(".tool-versions");
        fs::write(&file, content).unwrap();
        file
    }

    /// Write `<home>/.tool-versions`.
    pub fn home_tool_versions(&self, content: &str) -> PathBuf {
        let file = self.home().join(".tool-versions");
        fs::write(&file, content).unwrap();
        file
    }

    /// Write the global default file `<root>/version/<tool>`.
    pub fn global_version(&self, tool: &str, content: &str) -> PathBuf {
        let dir = self.root().join("version");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join(tool);
        fs::write(&file, content).unwrap();
        file
    }

    /// Create `<root>/installs/<tool>/<version>` with the given
    /// sub-directories (e.g. `"bin"`, `"lib/node_modules"`).
    pub fn install(&self, tool: &str, version: &str, subdirs: &[&str]) -> PathBuf {
        let install = self.root().join("installs").join(tool).join(version);
        fs::create_dir_all(&install).unwrap();
        for sub in subdirs {
            fs::create_dir_all(install.join(sub)).unwrap();
        }
        install
    }

    /// Create `<root>/shims` and `<root>/bin`.
    pub fn with_asdf_dirs(self) -> Self {
        fs::create_dir_all(self.root().join("shims")).unwrap();
        fs::create_dir_all(self.root().join("bin")).unwrap();
        self
    }
}
