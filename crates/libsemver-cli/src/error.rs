//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Offset added to core failure codes to form process exit codes
const CORE_EXIT_BASE: i32 = 10;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (writing output, reading config files)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from libsemver-core
    #[error("{0}")]
    Core(#[from] libsemver_core::Error),

    /// One or more inputs of a batch validation were not versions
    #[error("{invalid} of {total} input(s) are not valid versions")]
    Validation { invalid: usize, total: usize },

    /// Configuration file could not be read or understood
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Config { .. } => 5,
            Self::Core(e) => CORE_EXIT_BASE + e.kind().code(),
            Self::Validation { .. } => {
                CORE_EXIT_BASE + libsemver_core::ErrorKind::InvalidVersionFormat.code()
            }
            Self::Json(_) => 20,
            Self::Yaml(_) => 21,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
