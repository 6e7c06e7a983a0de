//! Error types for RJ I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for RJ I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during scene I/O and export.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A named object does not exist in the scene.
    #[error("no mesh object named {name:?} in scene")]
    ObjectNotFound {
        /// The requested object name.
        name: String,
    },

    /// Document building failed (attachment resolution).
    #[error(transparent)]
    Document(#[from] rj_document::DocumentError),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// String conversion error.
    #[error("string conversion error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}
