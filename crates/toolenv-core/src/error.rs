//! Error types for toolenv-core

use std::path::PathBuf;

/// Result type for toolenv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in toolenv-core operations
///
/// Missing declaration files, unlisted tools and uninstalled versions are
/// expected conditions and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The version-manager root does not exist
    #[error("asdf not found at {}", path.display())]
    RootNotFound { path: PathBuf },

    /// The user's home directory could not be determined
    #[error("Could not determine the home directory")]
    HomeNotFound,

    /// Filesystem error from toolenv-fs
    #[error(transparent)]
    Fs(#[from] toolenv_fs::Error),
}
