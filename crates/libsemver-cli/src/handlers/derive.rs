//! bump and strip command handlers

use super::parse_version;
use crate::cli::{BumpArgs, StripArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use crate::report::DerivationReport;
use tracing::instrument;

/// Handle the bump command
#[instrument(skip(config, output))]
pub fn handle_bump(args: BumpArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let version = parse_version(&args.version)?;
    let index = args
        .selected_index()
        .unwrap_or_else(|| config.bump.default_part.index());

    let bumped = version.bump(index)?;
    tracing::info!(index, result = %bumped, "Bumped version");

    output.derivation(&DerivationReport {
        input: args.version,
        operation: format!("bump {}", index),
        result: bumped.to_string(),
    })
}

/// Handle the strip command
#[instrument(skip(output))]
pub fn handle_strip(args: StripArgs, output: &mut OutputWriter) -> Result<()> {
    let version = parse_version(&args.version)?;

    // No flag strips both labels
    let (prerelease, metadata) = match (args.prerelease, args.metadata) {
        (false, false) => (true, true),
        flags => flags,
    };

    let mut stripped = version;
    let mut removed = Vec::new();
    if prerelease {
        stripped = stripped.strip_prerelease();
        removed.push("prerelease");
    }
    if metadata {
        stripped = stripped.strip_metadata();
        removed.push("metadata");
    }
    tracing::info!(result = %stripped, "Stripped version");

    output.derivation(&DerivationReport {
        input: args.version,
        operation: format!("strip {}", removed.join("+")),
        result: stripped.to_string(),
    })
}
