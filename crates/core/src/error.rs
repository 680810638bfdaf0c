//! Error types for notesync operations.
//!
//! Converting notes to HTML never fails: every line that matches no other
//! construct becomes free text. Errors come from the edges of the library,
//! i.e. reading input, detecting the source format, and loading the sync
//! configuration.
//!
//! # Example
//!
//! ```rust
//! use notesync_core::{NotesyncError, Result};
//!
//! fn require_content(text: &str) -> Result<&str> {
//!     if text.is_empty() {
//!         return Err(NotesyncError::MalformedValue(text.to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notesync.
#[derive(Error, Debug)]
pub enum NotesyncError {
    /// HTTP request errors from reqwest.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Wraps standard I/O errors for file and terminal operations.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The source format could not be determined or is not supported.
    #[error("Unknown file extension: {0}")]
    UnsupportedFormat(String),

    /// A configuration file line is not of the form `key: value`.
    #[error("Malformed line {line_number}: {line}")]
    MalformedLine { line_number: usize, line: String },

    /// A single configuration value (typically typed at a prompt) is not a valid token.
    #[error("Malformed value: {0:?}")]
    MalformedValue(String),

    /// The configuration file names keys the schema does not know about.
    #[error("Unknown fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    /// A required configuration field has no value.
    #[error("Missing configuration field: {0}")]
    MissingField(String),

    /// A page date could not be formatted.
    #[error("Date formatting failed: {0}")]
    DateFormat(#[from] time::error::Format),

    /// The interactive prompt could not deliver a value.
    #[error("Prompt failed for {field}: {reason}")]
    PromptError { field: String, reason: String },
}

/// Result type alias for NotesyncError.
pub type Result<T> = std::result::Result<T, NotesyncError>;
