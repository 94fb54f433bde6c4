//! Unified error types for chatmerge.
//!
//! A single [`ChatmergeError`] enum covers every failure the library can
//! report. Note that most conditions in the extractor are not errors at
//! all: a timestamp that fails to parse falls back to the raw string, and
//! a missing optional node simply leaves the field absent. What remains is
//! I/O and serialization.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatmerge operations.
pub type Result<T> = std::result::Result<T, ChatmergeError>;

/// The error type for all chatmerge operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatmergeError {
    /// An I/O error occurred while discovering inputs or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A single export file could not be read.
    ///
    /// Raised per input file so the caller can skip the file and keep
    /// processing the rest of the batch.
    #[error("Failed to read export file {}: {source}", path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// The underlying read error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization error while writing the merged bundle.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatmergeError {
    /// Creates a per-file read error.
    pub fn parse(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatmergeError::Parse {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatmergeError::Io(_))
    }

    /// Returns `true` if this is a per-file read error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatmergeError::Parse { .. })
    }

    /// Returns the input file this error is attached to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ChatmergeError::Parse { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_path() {
        let err = ChatmergeError::parse(
            "messages2.html",
            io::Error::new(io::ErrorKind::InvalidData, "not utf-8"),
        );

        assert!(err.is_parse());
        assert!(!err.is_io());
        assert_eq!(err.path(), Some(Path::new("messages2.html")));
        assert!(err.to_string().contains("messages2.html"));
        assert!(err.to_string().contains("not utf-8"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: ChatmergeError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_io());
        assert!(err.path().is_none());
    }
}
