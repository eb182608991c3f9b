//! Logging setup for the semver CLI
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only command
//! results. Settings are layered: the `[logging]` table of the config file
//! (ignored when `-v` is given), then `RUST_LOG`, `SEMVER_LOG_FORMAT` and
//! `SEMVER_LOG_CONSOLE`, then `--quiet`.

use crate::config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Allow ANSI colors on the console
    pub console: bool,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact format for everyday use
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl LogFormat {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "full" => Some(Self::Full),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            console: true,
            thread_ids: false,
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {}
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.format = LogFormat::Full;
                config.source_location = true;
                config.thread_ids = true;
            }
        }

        config
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        // RUST_LOG takes precedence
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }

        if let Ok(format) = std::env::var("SEMVER_LOG_FORMAT") {
            match LogFormat::from_name(&format) {
                Some(format) => self.format = format,
                None => eprintln!("Warning: invalid log format '{}', using default", format),
            }
        }

        if let Ok(console) = std::env::var("SEMVER_LOG_CONSOLE") {
            self.console = console.to_lowercase() == "true" || console == "1";
        }
    }

    /// Apply the `[logging]` table of a configuration file
    pub fn merge_with_file(&mut self, file: &config::LoggingConfig) {
        if let Some(level) = &file.level {
            self.level = level.clone();
        }
        if let Some(format) = file.format.as_deref().and_then(LogFormat::from_name) {
            self.format = format;
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .map_err(|e| Error::other(format!("Invalid log filter '{}': {}", config.level, e)))?;
    let ansi = config.console && std::io::stderr().is_terminal();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(config.thread_ids)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    // Each format is a distinct subscriber type
    let installed = match config.format {
        LogFormat::Compact => {
            tracing::subscriber::set_global_default(builder.with_ansi(ansi).compact().finish())
        }
        LogFormat::Full => tracing::subscriber::set_global_default(builder.with_ansi(ansi).finish()),
        LogFormat::Json => {
            tracing::subscriber::set_global_default(builder.with_ansi(false).json().finish())
        }
    };
    installed.map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(config = ?config, "Logging system initialized");
    Ok(())
}
