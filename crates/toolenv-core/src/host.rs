//! The seam between the core and the editor (or terminal) hosting it

use std::path::PathBuf;

/// Editor state the core reads at the start of every run.
pub trait Host {
    /// Path of the file in the active view, if it has one.
    fn active_file(&self) -> Option<PathBuf>;

    /// Folders open in the active window. Empty when there is no window.
    fn folders(&self) -> Vec<PathBuf>;

    /// Identifier of the active window, used to detect window switches.
    fn window_id(&self) -> Option<u64> {
        None
    }
}

/// A host whose state is fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHost {
    pub active_file: Option<PathBuf>,
    pub folders: Vec<PathBuf>,
    pub window_id: Option<u64>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.active_file = Some(file.into());
        self
    }

    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folders.push(folder.into());
        self
    }

    pub fn with_window(mut self, id: u64) -> Self {
        self.window_id = Some(id);
        self
    }
}

impl Host for StaticHost {
    fn active_file(&self) -> Option<PathBuf> {
        self.active_file.clone()
    }

    fn folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn window_id(&self) -> Option<u64> {
        self.window_id
    }
}
