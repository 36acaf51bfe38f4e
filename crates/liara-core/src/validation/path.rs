//! Project path validation
//!
//! Checks that a candidate project directory exists, is a directory, and
//! is writable. Writability is a live probe: a scratch file is created
//! inside the directory and removed again, so callers must tolerate that
//! side effect. Validation and the later use of the path are separate
//! filesystem operations; the directory can still change in between.

use std::io::{ErrorKind, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::contains_ignore_case;

/// Words a project path may not contain
const LIARA_RESERVED_PATHS: &[&str] = &["Liara", "Editor", "Template", "Engine"];

/// Prefix of the scratch file used by the write probe
const PROBE_FILE_PREFIX: &str = ".liara-write-probe";

/// Error kinds produced when validating a project path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("the project path does not exist")]
    PathDoesNotExist,

    #[error("the project path is not a folder")]
    PathIsNotADirectory,

    #[error("the project path is not writable")]
    PathIsNotAccessible,

    #[error("the project path contains the reserved word '{0}'")]
    ReservedLiaraPath(String),

    #[error("the project path could not be probed: {0}")]
    UnspecifiedError(String),
}

/// Check that a candidate project directory exists, is a directory, is
/// writable, and contains none of Liara's reserved words
pub fn validate_project_path(path: &str) -> Result<(), PathError> {
    if path.trim().is_empty() {
        return Err(PathError::PathDoesNotExist);
    }

    let dir = Path::new(path);
    if !dir.exists() {
        return Err(PathError::PathDoesNotExist);
    }
    if !dir.is_dir() {
        return Err(PathError::PathIsNotADirectory);
    }

    probe_write_access(dir)?;

    if let Some(word) = LIARA_RESERVED_PATHS
        .iter()
        .find(|word| contains_ignore_case(path, word))
    {
        return Err(PathError::ReservedLiaraPath((*word).to_string()));
    }

    Ok(())
}

/// Append the platform separator when the path does not already end with one
///
/// The name pipeline concatenates path and name verbatim, so paths handed
/// to it need their trailing separator.
pub fn ensure_trailing_separator(path: &str) -> String {
    if path.is_empty() || path.ends_with(['/', '\\']) {
        path.to_string()
    } else {
        format!("{}{}", path, std::path::MAIN_SEPARATOR)
    }
}

/// Create and immediately delete a scratch file to prove the directory is
/// writable
fn probe_write_access(dir: &Path) -> Result<(), PathError> {
    let mut probe = tempfile::Builder::new()
        .prefix(PROBE_FILE_PREFIX)
        .tempfile_in(dir)
        .map_err(classify_probe_error)?;
    probe
        .write_all(b"Liara writes this file to check that the folder is writable; it is removed immediately.\n")
        .map_err(classify_probe_error)?;
    probe.close().map_err(classify_probe_error)?;
    debug!(path = %dir.display(), "write probe succeeded");
    Ok(())
}

/// Permission failures get their own kind; any other I/O failure keeps its
/// underlying message
fn classify_probe_error(err: std::io::Error) -> PathError {
    if err.kind() == ErrorKind::PermissionDenied {
        PathError::PathIsNotAccessible
    } else {
        PathError::UnspecifiedError(err.to_string())
    }
}
