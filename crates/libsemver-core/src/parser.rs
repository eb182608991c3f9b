//! Version string parser and explicit-component constructor
//!
//! Parsing splits the metadata off at the first `+`, then the prerelease off
//! at the first `-`, and requires exactly three numeric release components.
//! A failure never yields a partially built version.
//!
//! Copyright (c) 2025 libsemver contributors
//! Licensed under the Apache-2.0 license

use crate::error::{exhausted, Error, Result};
use crate::grammar;
use crate::identifier::Identifier;
use crate::version::Version;
use std::str::FromStr;

const RELEASE_COMPONENT_NAMES: [&str; 3] = ["major", "minor", "patch"];

/// Parse a SemVer 2.0.0 version string
pub fn parse(text: &str) -> Result<Version> {
    let (head, metadata) = match text.split_once('+') {
        Some((head, meta)) => (head, Some(meta)),
        None => (text, None),
    };
    let (core, prerelease) = match head.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (head, None),
    };

    let release = parse_release(core, text)?;
    let prerelease = match prerelease {
        Some(field) => parse_prerelease(field, text)?,
        None => Vec::new(),
    };
    let metadata = match metadata {
        Some(field) => parse_metadata(field, text)?,
        None => Vec::new(),
    };

    Ok(Version::from_validated(release, prerelease, metadata))
}

/// `major.minor.patch`, each a numeric identifier
fn parse_release(core: &str, input: &str) -> Result<Vec<u64>> {
    let count = core.split('.').count();
    if count != RELEASE_COMPONENT_NAMES.len() {
        return Err(Error::invalid_format(
            input,
            format!("expected major.minor.patch, found {} component(s)", count),
        ));
    }

    let mut release = Vec::new();
    release
        .try_reserve_exact(count)
        .map_err(exhausted("release components"))?;

    for (part, name) in core.split('.').zip(RELEASE_COMPONENT_NAMES) {
        if part.is_empty() {
            return Err(Error::invalid_format(input, format!("empty {} component", name)));
        }
        if !grammar::is_all_digits(part) {
            return Err(Error::invalid_format(
                input,
                format!("{} component '{}' is not a number", name, part),
            ));
        }
        if !grammar::is_numeric_identifier(part) {
            return Err(Error::invalid_format(
                input,
                format!("leading zero in {} component '{}'", name, part),
            ));
        }
        let value = part.parse::<u64>().map_err(|_| {
            Error::invalid_format(input, format!("{} component '{}' is too large", name, part))
        })?;
        release.push(value);
    }

    Ok(release)
}

fn parse_prerelease(field: &str, input: &str) -> Result<Vec<Identifier>> {
    let mut identifiers = Vec::new();
    identifiers
        .try_reserve_exact(field.split('.').count())
        .map_err(exhausted("prerelease identifiers"))?;

    for part in field.split('.') {
        identifiers.push(Identifier::parse_in(part, input)?);
    }
    Ok(identifiers)
}

fn parse_metadata(field: &str, input: &str) -> Result<Vec<String>> {
    let mut identifiers = Vec::new();
    identifiers
        .try_reserve_exact(field.split('.').count())
        .map_err(exhausted("metadata identifiers"))?;

    for part in field.split('.') {
        if part.is_empty() {
            return Err(Error::invalid_format(input, "empty build metadata identifier"));
        }
        if !grammar::is_metadata_identifier(part) {
            return Err(Error::invalid_format(
                input,
                format!("build metadata identifier '{}' contains a disallowed character", part),
            ));
        }
        let mut owned = String::new();
        owned
            .try_reserve_exact(part.len())
            .map_err(exhausted("metadata identifier"))?;
        owned.push_str(part);
        identifiers.push(owned);
    }
    Ok(identifiers)
}

impl Version {
    /// Parse a SemVer 2.0.0 version string, see [`parse`]
    pub fn parse(text: &str) -> Result<Self> {
        parse(text)
    }

    /// Build a version from explicit release components.
    ///
    /// `release` may have any non-zero length and is taken as is. `prerelease`
    /// and `metadata` are raw dot-separated text, validated like their parsed
    /// counterparts; an empty string means "none". Only three-component
    /// versions parse back from their canonical text.
    pub fn from_parts(release: &[u64], prerelease: &str, metadata: &str) -> Result<Self> {
        if release.is_empty() {
            return Err(Error::invalid_format(
                describe_parts(release, prerelease, metadata),
                "at least one release component is required",
            ));
        }

        let mut components = Vec::new();
        components
            .try_reserve_exact(release.len())
            .map_err(exhausted("release components"))?;
        components.extend_from_slice(release);

        let prerelease = if prerelease.is_empty() {
            Vec::new()
        } else {
            parse_prerelease(prerelease, prerelease)?
        };
        let metadata = if metadata.is_empty() {
            Vec::new()
        } else {
            parse_metadata(metadata, metadata)?
        };

        Ok(Version::from_validated(components, prerelease, metadata))
    }
}

/// Rendering of constructor arguments for diagnostics
fn describe_parts(release: &[u64], prerelease: &str, metadata: &str) -> String {
    format!("release={:?} prerelease={:?} metadata={:?}", release, prerelease, metadata)
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn reason(text: &str) -> String {
        match parse(text).unwrap_err() {
            Error::InvalidVersionFormat { reason, .. } => reason,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_release() {
        let v = parse("1.2.3").unwrap();
        assert_eq!(v.release_slice(), &[1, 2, 3]);
        assert!(v.prerelease().is_empty());
        assert!(v.metadata().is_empty());

        let v = parse("0.0.0").unwrap();
        assert_eq!(v.release_slice(), &[0, 0, 0]);

        let v = parse("18446744073709551615.0.0").unwrap();
        assert_eq!(v.major(), Some(u64::MAX));
    }

    #[test]
    fn test_parse_prerelease_and_metadata() {
        let v = parse("1.0.0-alpha-1.0.x-y+001.sha-1").unwrap();
        assert_eq!(v.prerelease_text(), "alpha-1.0.x-y");
        assert_eq!(v.metadata(), &["001".to_string(), "sha-1".to_string()]);

        // A '-' after the first '+' belongs to the metadata
        let v = parse("1.0.0+build-5").unwrap();
        assert!(v.is_release());
        assert_eq!(v.metadata_text(), "build-5");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in [
            "1.2", "1.02.3", "1.2.3-", "1.2.3-01", "a.b.c", "", "1.2.3.4", "1..3", "1.2.3+",
            "1.2.3-a..b", "1.2.3+a..b", "1.2.3-a_b", "1.2.3+a+b", "v1.2.3", " 1.2.3", "1.2.3 ",
            "01.2.3", "1.2.-3", "18446744073709551616.0.0",
        ] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidVersionFormat, "input {:?}", text);
            assert_eq!(err.input(), Some(text));
        }
    }

    #[test]
    fn test_parse_failure_reasons() {
        assert!(reason("1.2").contains("found 2 component(s)"));
        assert!(reason("1.02.3").contains("leading zero in minor"));
        assert!(reason("1.2.x").contains("patch component 'x' is not a number"));
        assert!(reason("1.2.3-").contains("empty prerelease identifier"));
        assert!(reason("1.2.3-01").contains("leading zero"));
        assert!(reason("1.2.3+").contains("empty build metadata"));
        assert!(reason("99999999999999999999.0.0").contains("too large"));
    }

    #[test]
    fn test_from_str() {
        let v: Version = "2.0.0-rc.1".parse().unwrap();
        assert_eq!(v.prerelease_text(), "rc.1");
        assert!("2.0".parse::<Version>().is_err());
    }

    #[test]
    fn test_from_parts() {
        let v = Version::from_parts(&[1, 2, 3], "", "").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));

        let v = Version::from_parts(&[1, 2, 3, 4, 5], "beta.2", "exp.001").unwrap();
        assert_eq!(v.release_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(v.prerelease_text(), "beta.2");
        assert_eq!(v.metadata_text(), "exp.001");

        let v = Version::from_parts(&[7], "", "").unwrap();
        assert_eq!(v.to_string(), "7");
        assert_eq!(v.minor(), None);
    }

    #[test]
    fn test_from_parts_validates_labels() {
        let err = Version::from_parts(&[1, 0, 0], "alpha.01", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidVersionFormat);
        assert_eq!(err.input(), Some("alpha.01"));

        let err = Version::from_parts(&[1, 0, 0], "", "a b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidVersionFormat);

        let err = Version::from_parts(&[1, 0, 0], "rc.", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidVersionFormat);
    }

    #[test]
    fn test_from_parts_requires_release() {
        let err = Version::from_parts(&[], "alpha", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidVersionFormat);
    }
}
