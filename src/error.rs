//! Error taxonomy for reading, merging and writing tables.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed lower-level failure (codec, I/O, persistence).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the read -> merge -> write pipeline.
///
/// Every variant is fatal to the current operation. Variants that concern a
/// specific file carry its path so the caller can present a precise message.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("unsupported file format '{extension}': {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The workbook has more than one sheet and there is no way to pick one.
    #[error("workbook contains {sheets} sheets, expected exactly one: {}", .path.display())]
    MultiSheet { path: PathBuf, sheets: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Header arity of `path` differs from the first file of the merge.
    #[error(
        "header mismatch in {}: expected {expected} header rows, found {found}",
        .path.display()
    )]
    Compatibility { path: PathBuf, expected: usize, found: usize },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, MergeError>;

impl MergeError {
    pub(crate) fn read(path: &Path, source: impl Into<BoxError>) -> Self {
        Self::Read { path: path.to_path_buf(), source: source.into() }
    }

    pub(crate) fn write(path: &Path, source: impl Into<BoxError>) -> Self {
        Self::Write { path: path.to_path_buf(), source: source.into() }
    }

    pub(crate) fn unsupported(path: &Path) -> Self {
        let extension = crate::utils::extension_with_dot(path);
        Self::UnsupportedFormat { path: path.to_path_buf(), extension }
    }

    /// The file this error concerns, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::UnsupportedFormat { path, .. }
            | Self::MultiSheet { path, .. }
            | Self::Read { path, .. }
            | Self::Compatibility { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::InvalidOptions(_) => None,
        }
    }
}
