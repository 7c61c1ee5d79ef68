//! External tool binary resolution.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve an external tool binary.
///
/// An explicit path from configuration takes precedence; otherwise the
/// binary is looked up in `PATH`.
///
/// # Errors
///
/// Returns [`Error::ToolPathInvalid`] if a configured path does not exist,
/// or [`Error::ToolNotFound`] if the binary is not in `PATH`.
pub fn resolve_tool(binary: &str, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::ToolPathInvalid {
            name: binary.to_string(),
            path: path.to_path_buf(),
        });
    }

    which::which(binary).map_err(|_| Error::ToolNotFound {
        name: binary.to_string(),
    })
}
