//! Error types for notebook construction and serialization

use thiserror::Error;

/// Error type for notebook model operations
#[derive(Error, Debug)]
pub enum NotebookError {
    /// I/O error when reading or writing a notebook file
    #[error("Failed to access notebook file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("Failed to process notebook JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Input record or aggregate failed shape/type validation
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Notebook version not supported
    #[error("Unsupported notebook version: {major}.{minor}")]
    UnsupportedVersion {
        /// Major version number found in the document
        major: i64,
        /// Minor version number found in the document
        minor: i64,
    },
}

/// Result type alias for notebook operations
pub type Result<T> = std::result::Result<T, NotebookError>;
