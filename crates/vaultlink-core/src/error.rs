//! Error types for the VaultLink system.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! This ensures composable error handling across crates.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all VaultLink operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Referenced path does not exist
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Invalid path (empty, not absolute, not a directory, etc.)
    #[error("Invalid path: {reason}")]
    InvalidPath { reason: String },

    /// Invalid or unreadable external configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Settings store read/write failure
    #[error("Settings error: {reason}")]
    SettingsError { reason: String },

    /// Link creation or removal failure
    #[error("Link error: {reason}")]
    LinkError { reason: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Error::PathNotFound { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(reason: impl Into<String>) -> Self {
        Error::InvalidPath {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a settings store error
    pub fn settings_error(reason: impl Into<String>) -> Self {
        Error::SettingsError {
            reason: reason.into(),
        }
    }

    /// Create a link error
    pub fn link_error(reason: impl Into<String>) -> Self {
        Error::LinkError {
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
