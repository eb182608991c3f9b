//! Command handlers for CLI subcommands
//!
//! Each handler turns its arguments into calls on `libsemver_core` and hands
//! the result to the [`OutputWriter`](crate::output::OutputWriter). Core
//! failures are returned unchanged so `main` can map their class to an exit
//! code.

mod compare;
mod completions;
mod derive;
mod parse;

pub use compare::handle_compare;
pub use completions::handle_completions;
pub use derive::{handle_bump, handle_strip};
pub use parse::{handle_parse, handle_validate};

use crate::error::Result;
use libsemver_core::Version;

/// Parse a command-line version argument, logging the outcome
fn parse_version(input: &str) -> Result<Version> {
    match Version::parse(input) {
        Ok(version) => {
            tracing::debug!(input, version = %version, "Parsed version");
            Ok(version)
        }
        Err(err) => {
            tracing::debug!(input, kind = %err.kind(), "Rejected version");
            Err(err.into())
        }
    }
}
