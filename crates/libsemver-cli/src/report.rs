//! Serializable command results

use libsemver_core::{Error, ErrorKind, Identifier, Version};
use serde::Serialize;
use std::cmp::Ordering;

/// Decomposition of a parsed version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionReport {
    pub version: String,
    pub release: Vec<u64>,
    pub prerelease: Vec<Identifier>,
    pub metadata: Vec<String>,
    pub is_release: bool,
}

impl From<&Version> for VersionReport {
    fn from(version: &Version) -> Self {
        Self {
            version: version.to_string(),
            release: version.release(),
            prerelease: version.prerelease().to_vec(),
            metadata: version.metadata().to_vec(),
            is_release: version.is_release(),
        }
    }
}

/// Outcome of validating one input string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl ValidationReport {
    pub fn new(input: &str, result: &Result<Version, Error>) -> Self {
        match result {
            Ok(version) => Self {
                input: input.to_string(),
                valid: true,
                version: Some(version.to_string()),
                error: None,
                kind: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                valid: false,
                version: None,
                error: Some(err.to_string()),
                kind: Some(err.kind()),
            },
        }
    }
}

/// Precedence relation between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Less,
    Equal,
    Greater,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Less => "<",
            Relation::Equal => "==",
            Relation::Greater => ">",
        }
    }
}

impl From<Ordering> for Relation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Relation::Less,
            Ordering::Equal => Relation::Equal,
            Ordering::Greater => Relation::Greater,
        }
    }
}

/// Result of comparing two versions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    pub relation: Relation,
    /// Present only when metadata-sensitive equality was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identical: Option<bool>,
}

/// Result of a bump or strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivationReport {
    pub input: String,
    pub operation: String,
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_report() {
        let version = Version::parse("1.2.3-rc.1+b.5").unwrap();
        let report = VersionReport::from(&version);
        assert_eq!(report.release, vec![1, 2, 3]);
        assert!(!report.is_release);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["version"], "1.2.3-rc.1+b.5");
        assert_eq!(json["prerelease"], serde_json::json!(["rc", 1]));
        assert_eq!(json["metadata"], serde_json::json!(["b", "5"]));
    }

    #[test]
    fn test_validation_report() {
        let ok = ValidationReport::new("1.0.0", &Version::parse("1.0.0"));
        assert!(ok.valid);
        let json = serde_json::to_value(&ok).unwrap();
        assert!(json.get("error").is_none());

        let bad = ValidationReport::new("1.0", &Version::parse("1.0"));
        assert!(!bad.valid);
        assert_eq!(bad.kind, Some(ErrorKind::InvalidVersionFormat));
        let json = serde_json::to_value(&bad).unwrap();
        assert_eq!(json["kind"], "invalid_version_format");
    }

    #[test]
    fn test_relation_from_ordering() {
        assert_eq!(Relation::from(Ordering::Less), Relation::Less);
        assert_eq!(Relation::from(Ordering::Greater).symbol(), ">");
        assert_eq!(serde_json::to_string(&Relation::Equal).unwrap(), "\"equal\"");
    }
}
