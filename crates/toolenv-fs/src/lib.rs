//! Filesystem layer for toolenv
//!
//! Provides normalized path handling, the version-manager directory
//! vocabulary and read-only I/O helpers.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::AsdfPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
