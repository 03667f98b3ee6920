//! Error types and handling infrastructure for rltab.
//!
//! Custom error types are built with `thiserror`; the binary boundary uses
//! `anyhow` for context. The filter/paginate/highlight core is total over its
//! inputs and never produces errors; the variants here cover the boundaries:
//! fetching the dataset, exporting it, and driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rltab operations.
#[derive(Error, Debug)]
pub enum RltabError {
    /// Dataset could not be fetched (I/O failure at the source)
    #[error("Failed to load dataset: {message}")]
    SourceError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Dataset file not found specifically (common case for user feedback)
    #[error("Dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Dataset was fetched but could not be decoded as records
    #[error("Failed to decode dataset: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Export of the filtered set failed
    #[error("Export failed: {message}")]
    ExportError { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UiError { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for rltab operations.
pub type Result<T> = std::result::Result<T, RltabError>;

impl RltabError {
    /// Create a SourceError from an io::Error with additional context
    pub fn source_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceError {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a SourceError with a descriptive message only
    pub fn source_message(message: impl Into<String>) -> Self {
        Self::SourceError {
            message: message.into(),
            source: None,
        }
    }

    /// Create an ExportError with a descriptive message
    pub fn export(message: impl Into<String>) -> Self {
        Self::ExportError {
            message: message.into(),
        }
    }

    /// Create a UiError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UiError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for RltabError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::SourceError {
                message: "File not found".to_string(),
                source: Some(err),
            },
            std::io::ErrorKind::PermissionDenied => Self::SourceError {
                message: "Permission denied".to_string(),
                source: Some(err),
            },
            _ => Self::SourceError {
                message: "IO operation failed".to_string(),
                source: Some(err),
            },
        }
    }
}
