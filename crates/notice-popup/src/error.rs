//! Error types for the popup layer
//!
//! Only the edges can fail: reading the page descriptor, loading
//! configuration, persisting the jar. Display decisions never error.

use notice_store::StoreError;
use std::path::PathBuf;

/// Popup layer error
#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    /// Page descriptor is not valid JSON for a notification
    #[error("invalid notification descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("io error reading config {path}: {source}")]
    ConfigIo {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid TOML for [`crate::NoticeConfig`]
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Jar persistence failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for popup operations
pub type NoticeResult<T> = Result<T, NoticeError>;
