//! User settings
//!
//! Settings live in `<config_dir>/toolenv/settings.toml` (any format
//! `ConfigStore` understands). Every key is optional.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use toolenv_fs::{ConfigStore, NormalizedPath};

use crate::Result;

/// Commands looked up with `which` when `debug` is enabled.
pub const DEFAULT_VERIFY_TOOLS: &[&str] = &["go", "node", "ruby", "python"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Verbose logging and tool verification after each run
    pub debug: bool,
    /// Publish the configured tools as status text
    pub show_status: bool,
    /// Re-run when a `.tool-versions` file is saved
    pub auto_reload_on_save: bool,
    /// Commands to locate on the new PATH in debug mode
    pub verify_tools: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            show_status: true,
            auto_reload_on_save: true,
            verify_tools: DEFAULT_VERIFY_TOOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }
}

/// Finds and loads the settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    /// Override for the config directory (used for testing).
    config_dir_override: Option<PathBuf>,
}

impl SettingsLoader {
    /// Use the platform config directory via `dirs::config_dir()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` instead of `<config_dir>/toolenv`.
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir_override: Some(dir.into()),
        }
    }

    fn config_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join("toolenv"))
    }

    /// The settings file path, whether or not it exists.
    pub fn settings_path(&self) -> Option<NormalizedPath> {
        self.config_dir()
            .map(|dir| NormalizedPath::new(dir.join("settings.toml")))
    }

    /// Load the settings file, or defaults when there is none.
    pub fn load(&self) -> Result<Settings> {
        match self.settings_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(%path, "Loading settings");
                Settings::load(&path)
            }
            path => {
                tracing::debug!(?path, "No settings file, using defaults");
                Ok(Settings::default())
            }
        }
    }
}
