//! parse and validate command handlers

use super::parse_version;
use crate::cli::{ParseArgs, ValidateArgs};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use crate::report::{ValidationReport, VersionReport};
use libsemver_core::Version;
use tracing::instrument;

/// Handle the parse command
#[instrument(skip(output))]
pub fn handle_parse(args: ParseArgs, output: &mut OutputWriter) -> Result<()> {
    let version = parse_version(&args.version)?;
    output.version_report(&VersionReport::from(&version))
}

/// Handle the validate command
#[instrument(skip(output), fields(count = args.versions.len()))]
pub fn handle_validate(args: ValidateArgs, output: &mut OutputWriter) -> Result<()> {
    let reports: Vec<ValidationReport> = args
        .versions
        .iter()
        .map(|input| ValidationReport::new(input, &Version::parse(input)))
        .collect();

    output.validation_reports(&reports)?;

    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(total = reports.len(), invalid, "Validation finished");
    if invalid > 0 {
        return Err(Error::Validation {
            invalid,
            total: reports.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::test_support::capture;
    use libsemver_core::ErrorKind;

    #[test]
    fn test_parse_writes_report() {
        let (mut output, buffer) = capture(OutputFormat::Json);
        handle_parse(
            ParseArgs {
                version: "1.2.3-alpha.1+sha.9".to_string(),
            },
            &mut output,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(buffer.contents().trim()).unwrap();
        assert_eq!(value["prerelease"], serde_json::json!(["alpha", 1]));
        assert_eq!(value["metadata"], serde_json::json!(["sha", "9"]));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let (mut output, buffer) = capture(OutputFormat::Human);
        let err = handle_parse(
            ParseArgs {
                version: "1.2.3-01".to_string(),
            },
            &mut output,
        )
        .unwrap_err();

        match err {
            Error::Core(core) => assert_eq!(core.kind(), ErrorKind::InvalidVersionFormat),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_validate_reports_every_input() {
        let (mut output, buffer) = capture(OutputFormat::Human);
        let err = handle_validate(
            ValidateArgs {
                versions: vec!["1.0.0".into(), "a.b.c".into(), "2.0.0-rc.1".into()],
            },
            &mut output,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Validation { invalid: 1, total: 3 }));
        assert_eq!(buffer.contents().lines().count(), 3);
    }

    #[test]
    fn test_validate_all_valid() {
        let (mut output, _buffer) = capture(OutputFormat::Json);
        handle_validate(
            ValidateArgs {
                versions: vec!["0.1.0".into(), "1.0.0+build".into()],
            },
            &mut output,
        )
        .unwrap();
    }
}
