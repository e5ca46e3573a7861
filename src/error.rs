//! Error types for checkrun operations.
//!
//! This module defines [`CheckrunError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A check tool exiting non-zero is *not* an error; it is recorded as a
//!   failed [`CheckOutcome`](crate::checks::CheckOutcome)
//! - Use `CheckrunError` for conditions that stop a run before checks start
//! - Use `anyhow::Error` (via `CheckrunError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for checkrun operations.
#[derive(Debug, Error)]
pub enum CheckrunError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The source tree to check does not exist.
    #[error("Source directory not found: {path}")]
    SourceDirNotFound { path: PathBuf },

    /// A check name given on the command line does not exist.
    #[error("Unknown check: {name}")]
    UnknownCheck { name: String },

    /// A tool is not on the command search path.
    #[error("Tool not found on PATH: {program}")]
    ToolNotFound { program: String },

    /// A tool could not be started for another reason.
    #[error("Failed to start '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckrunError {
    /// Whether this error is a usage/configuration problem (exit code 2).
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
                | Self::SourceDirNotFound { .. }
                | Self::UnknownCheck { .. }
        )
    }
}

/// Result type alias for checkrun operations.
pub type Result<T> = std::result::Result<T, CheckrunError>;
