//! Error types for vault-widget operations.
//!
//! This module provides the error hierarchy using `thiserror` for bookmark
//! management, file reading, and CLI commands.

use thiserror::Error;

/// Result type alias for vault-widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Bookmark store errors.
    #[error("bookmark error: {0}")]
    Bookmark(#[from] BookmarkError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Bookmark-specific errors.
#[derive(Error, Debug)]
pub enum BookmarkError {
    /// No bookmark with the given name.
    #[error("bookmark not found: {name}")]
    NotFound {
        /// Bookmark name that was not found.
        name: String,
    },

    /// Bookmark name is empty or whitespace.
    #[error("invalid bookmark name: {name:?}")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// Bookmark store could not be parsed or serialized.
    #[error("bookmark store is malformed: {0}")]
    Malformed(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<serde_json::Error> for BookmarkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
