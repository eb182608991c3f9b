//! compare command handler

use super::parse_version;
use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use crate::report::{ComparisonReport, Relation};
use libsemver_core::precedence;
use tracing::instrument;

/// Handle the compare command
#[instrument(skip(output))]
pub fn handle_compare(args: CompareArgs, output: &mut OutputWriter) -> Result<()> {
    let left = parse_version(&args.left)?;
    let right = parse_version(&args.right)?;

    let relation = Relation::from(precedence::compare(&left, &right));
    let identical = args
        .exact
        .then(|| precedence::identical(&left, &right));
    tracing::info!(?relation, ?identical, "Compared versions");

    output.comparison(&ComparisonReport {
        left: left.to_string(),
        right: right.to_string(),
        relation,
        identical,
    })
}
