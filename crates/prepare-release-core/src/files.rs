//! Whole-document reads and writes.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{ReleaseError, ReleaseResult};

/// Reads a document fully into memory.
///
/// # Errors
///
/// Returns [`ReleaseError::Read`] if the file is missing or unreadable.
pub fn read_document(path: &Path) -> ReleaseResult<String> {
    debug!(path = %path.display(), "reading document");

    fs::read_to_string(path).map_err(|source| ReleaseError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrites an existing document with `content`.
///
/// # Errors
///
/// Returns [`ReleaseError::Write`] if the file cannot be written.
pub fn write_document(path: &Path, content: &str) -> ReleaseResult<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing document");

    fs::write(path, content).map_err(|source| ReleaseError::Write {
        path: path.to_path_buf(),
        source,
    })
}
