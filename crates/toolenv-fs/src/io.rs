//! Read-only I/O helpers

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// List the names of the non-hidden subdirectories of `path`, sorted.
///
/// Entries starting with `.` and plain files are skipped. Entries whose
/// names are not valid UTF-8 are skipped as well.
pub fn list_dirs(path: &NormalizedPath) -> Result<Vec<String>> {
    let native_path = path.to_native();
    let entries = fs::read_dir(&native_path).map_err(|e| Error::io(&native_path, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_path, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::trace!(path = %path, "Skipping non UTF-8 entry");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if entry.path().is_dir() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
