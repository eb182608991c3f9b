//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// semver - Parse, compare and derive Semantic Versioning 2.0.0 versions
#[derive(Parser, Debug)]
#[command(
    name = "semver",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SEMVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (overrides the configuration file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a version and show its components
    Parse(ParseArgs),

    /// Check whether one or more strings are valid versions
    Validate(ValidateArgs),

    /// Compare two versions by precedence
    Compare(CompareArgs),

    /// Increment a release component
    Bump(BumpArgs),

    /// Remove the prerelease label and/or build metadata
    Strip(StripArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Version string, e.g. 1.2.3-rc.1+build.5
    #[arg(id = "version_arg", value_name = "VERSION")]
    pub version: String,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Version strings to validate
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "RIGHT")]
    pub right: String,

    /// Also report whether build metadata is identical
    #[arg(long)]
    pub exact: bool,
}

/// Arguments for the bump command
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("part").args(["major", "minor", "patch", "index"])))]
pub struct BumpArgs {
    /// Version to bump
    #[arg(id = "version_arg", value_name = "VERSION")]
    pub version: String,

    /// Bump the major component
    #[arg(long)]
    pub major: bool,

    /// Bump the minor component
    #[arg(long)]
    pub minor: bool,

    /// Bump the patch component
    #[arg(long)]
    pub patch: bool,

    /// Bump the release component at this zero-based position
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,
}

/// Arguments for the strip command
#[derive(Parser, Debug)]
pub struct StripArgs {
    /// Version to strip
    #[arg(id = "version_arg", value_name = "VERSION")]
    pub version: String,

    /// Remove the prerelease label
    #[arg(long)]
    pub prerelease: bool,

    /// Remove build metadata
    #[arg(long)]
    pub metadata: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
    /// YAML output
    Yaml,
}

/// Named release component for `bump`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpPart {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpPart {
    /// Zero-based release index of this part
    pub fn index(self) -> usize {
        match self {
            BumpPart::Major => 0,
            BumpPart::Minor => 1,
            BumpPart::Patch => 2,
        }
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self, configured: bool) -> bool {
        configured && !self.no_color && std::io::stdout().is_terminal()
    }
}

impl BumpArgs {
    /// The release index selected by flags, if any
    pub fn selected_index(&self) -> Option<usize> {
        if self.major {
            Some(BumpPart::Major.index())
        } else if self.minor {
            Some(BumpPart::Minor.index())
        } else if self.patch {
            Some(BumpPart::Patch.index())
        } else {
            self.index
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["semver", "-vv", "parse", "1.2.3"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["semver", "--quiet", "parse", "1.2.3"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_bump_part_selection() {
        let cli = Cli::parse_from(["semver", "bump", "1.2.3", "--minor"]);
        match cli.command {
            Commands::Bump(args) => assert_eq!(args.selected_index(), Some(1)),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["semver", "bump", "1.2.3", "--index", "4"]);
        match cli.command {
            Commands::Bump(args) => assert_eq!(args.selected_index(), Some(4)),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["semver", "bump", "1.2.3"]);
        match cli.command {
            Commands::Bump(args) => assert_eq!(args.selected_index(), None),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bump_parts_conflict() {
        let result = Cli::try_parse_from(["semver", "bump", "1.2.3", "--major", "--patch"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_flag() {
        let cli = Cli::parse_from(["semver", "-o", "json-pretty", "parse", "1.2.3"]);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));
    }

    #[test]
    fn test_validate_requires_input() {
        assert!(Cli::try_parse_from(["semver", "validate"]).is_err());
    }
}
