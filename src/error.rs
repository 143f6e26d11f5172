//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or configuring the machinery.
///
/// File-level errors (`NotReadable`, `UnsupportedFormat`) are intercepted
/// per file by the [`Config`](crate::Config) facade and turned into outcome
/// entries. Registration and base-directory errors always propagate to the
/// caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened for reading.
    #[error("not a readable file: {path}")]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No loader is registered for the requested extension.
    #[error("no file loader registered for [{extension}] files")]
    UnsupportedFormat { extension: String },

    /// An extension token passed to `register` was malformed.
    #[error("invalid file loader extension token [{token}]")]
    InvalidRegistration { token: String },

    /// The requested base directory is missing or not readable.
    #[error("base directory not readable: {path}")]
    BaseDirNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
