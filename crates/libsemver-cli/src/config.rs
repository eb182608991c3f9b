//! Configuration management for the CLI
//!
//! Configuration is read from the first file found among:
//! - the path given with `--config` (or `SEMVER_CONFIG`)
//! - `.semver.toml` / `.semver.json` / `.semver.yaml` in the working directory
//! - `<config dir>/libsemver/config.toml` (or `.json` / `.yaml`)
//!
//! When none of the default locations exists the built-in defaults apply. An
//! explicit `--config` path must exist: a missing or unreadable file there is
//! a configuration error. Command-line flags win over file values.

use crate::cli::{BumpPart, OutputFormat};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Defaults for the bump command
    pub bump: BumpConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

/// Bump command configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BumpConfig {
    /// Part bumped when no part flag is given
    pub default_part: BumpPart,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
    Yaml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path).ok_or_else(|| {
            Error::config(path, "unsupported file extension, expected .toml, .json, .yaml or .yml")
        })?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(path, format!("cannot read file: {}", e)))?;

        Self::from_str_with_format(&content, format)
            .map_err(|message| Error::config(path, message))
    }

    fn from_str_with_format(content: &str, format: FileFormat) -> std::result::Result<Self, String> {
        match format {
            FileFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            FileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        match Self::default_config_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check, highest priority first
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".semver.toml"),
            PathBuf::from(".semver.json"),
            PathBuf::from(".semver.yaml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let dir = config_dir.join("libsemver");
            paths.push(dir.join("config.toml"));
            paths.push(dir.join("config.json"));
            paths.push(dir.join("config.yaml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Human);
        assert!(config.output.color);
        assert_eq!(config.bump.default_part, BumpPart::Patch);
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "config.toml",
            r#"
[output]
format = "json-pretty"
color = false

[bump]
default_part = "minor"
"#,
        );

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::JsonPretty);
        assert!(!config.output.color);
        assert_eq!(config.bump.default_part, BumpPart::Minor);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_config(&dir, "c.json", r#"{"logging": {"level": "debug"}}"#);
        let config = Config::from_file(&json).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.output, OutputConfig::default());

        let yaml = write_config(&dir, "c.yml", "bump:\n  default_part: major\n");
        let config = Config::from_file(&yaml).unwrap();
        assert_eq!(config.bump.default_part, BumpPart::Major);
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "bad.toml", "[output]\nformat = \"xml\"\n");
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let path = write_config(&dir, "config.ini", "format=json");
        assert!(matches!(Config::from_file(&path), Err(Error::Config { .. })));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::from_file(&missing), Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere.toml");
        let err = Config::load_with_file(Some(missing.as_path())).unwrap_err();
        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().contains("nowhere.toml"));
    }

    #[test]
    fn test_explicit_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "explicit.toml", "[output]\nformat = \"yaml\"\n");
        let config = Config::load_with_file(Some(path.as_path())).unwrap();
        assert_eq!(config.output.format, OutputFormat::Yaml);
    }
}
