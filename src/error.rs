//! Error types for finding unused files.

use std::path::PathBuf;
use thiserror::Error;

/// Every variant is fatal: the whole search is aborted and no partial result is returned.
#[derive(Error, Debug)]
pub enum FufError {
    /// Missing required input, detected before any I/O.
    #[error("{0}")]
    Validation(String),

    /// Malformed glob pattern.
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Filesystem failure while resolving a pattern or reading a file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FufError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<glob::GlobError> for FufError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        Self::io(path, err.into())
    }
}

pub type FufResult<T> = Result<T, FufError>;

/// Attach the offending path to a `std::io::Error`.
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> FufResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> FufResult<T> {
        self.map_err(|e| FufError::io(path, e))
    }
}
