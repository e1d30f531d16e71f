//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a release.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// Failed to read a document.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a document back.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A search pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for release operations.
pub type ReleaseResult<T> = Result<T, ReleaseError>;
