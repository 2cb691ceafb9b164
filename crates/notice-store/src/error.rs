//! Error types for jar persistence

use std::path::PathBuf;

/// Errors while loading or saving a jar file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error on the jar file
    #[error("io error on {path}: {source}")]
    Io {
        /// Jar file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Jar file is not valid JSON
    #[error("malformed jar file {path}: {source}")]
    Format {
        /// Jar file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create format error for path
    pub fn format_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }
}
