//! Error types for Menumend.
//!
//! Failures here are local and recoverable: batch operations report per-item
//! outcomes instead of aborting, and target-resolution problems degrade to
//! `None`/record messages rather than surfacing as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Menumend library.
#[derive(Debug, Error)]
pub enum MenumendError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Administrator privileges required to {action}")]
    PrivilegeRequired { action: String },

    #[error("Not a valid executable: {0}")]
    InvalidExecutable(PathBuf),

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Menumend operations.
pub type Result<T> = std::result::Result<T, MenumendError>;

impl From<std::io::Error> for MenumendError {
    fn from(err: std::io::Error) -> Self {
        MenumendError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl MenumendError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        MenumendError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create an IO error with an operation description and path context.
    pub fn io_op(message: impl Into<String>, path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        MenumendError::Io {
            message: message.into(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether this error reports a missing privilege rather than a fault.
    pub fn is_privilege(&self) -> bool {
        matches!(self, MenumendError::PrivilegeRequired { .. })
    }
}
