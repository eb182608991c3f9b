//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing command results
//! in various formats (JSON, YAML, human-readable).

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::report::{ComparisonReport, DerivationReport, ValidationReport, VersionReport};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

/// Trait for formatting output with specialized support for report types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a version decomposition
    fn format_version_report(&self, report: &VersionReport) -> Result<String>;

    /// Format a comparison result
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String>;

    /// Format a bump or strip result
    fn format_derivation(&self, report: &DerivationReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_version_report(&self, report: &VersionReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_version_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_comparison_human(report)),
            _ => self.format(report),
        }
    }

    fn format_derivation(&self, report: &DerivationReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(report.result.clone()),
            _ => self.format(report),
        }
    }
}

/// Human-readable version decomposition
pub fn format_version_report_human(report: &VersionReport) -> String {
    let or_none = |s: String| if s.is_empty() { "(none)".to_string() } else { s };
    let release = report
        .release
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".");
    let prerelease = report
        .prerelease
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".");

    [
        format!("version:    {}", report.version),
        format!("release:    {}", release),
        format!("prerelease: {}", or_none(prerelease)),
        format!("metadata:   {}", or_none(report.metadata.join("."))),
        format!("is_release: {}", report.is_release),
    ]
    .join("\n")
}

/// Human-readable comparison, e.g. `1.0.0-rc.1 < 1.0.0`
pub fn format_comparison_human(report: &ComparisonReport) -> String {
    let mut text = format!("{} {} {}", report.left, report.relation.symbol(), report.right);
    if let Some(identical) = report.identical {
        text.push_str(&format!("\nidentical: {}", identical));
    }
    text
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success line (human format only, suppressed by quiet)
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a failure line (human format only)
    pub fn failure(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Writing data");
        self.writeln(&formatted)
    }

    /// Write a version decomposition
    pub fn version_report(&mut self, report: &VersionReport) -> Result<()> {
        let formatted = self.format.format_version_report(report)?;
        self.writeln(&formatted)
    }

    /// Write batch validation results
    pub fn validation_reports(&mut self, reports: &[ValidationReport]) -> Result<()> {
        if self.format != OutputFormat::Human {
            return self.data(&reports);
        }
        for report in reports {
            match (&report.version, &report.error) {
                (Some(version), _) => self.success(&format!("valid    {}", version))?,
                (None, Some(error)) => self.failure(&format!("invalid  {}", error))?,
                (None, None) => self.failure(&format!("invalid  {}", report.input))?,
            }
        }
        Ok(())
    }

    /// Write a comparison result
    pub fn comparison(&mut self, report: &ComparisonReport) -> Result<()> {
        let formatted = self.format.format_comparison(report)?;
        self.writeln(&formatted)
    }

    /// Write a bump or strip result
    pub fn derivation(&mut self, report: &DerivationReport) -> Result<()> {
        let formatted = self.format.format_derivation(report)?;
        self.writeln(&formatted)
    }
}
