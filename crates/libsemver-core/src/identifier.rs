//! Prerelease identifiers
//!
//! Prerelease labels are parsed once into a tagged [`Identifier`] so that
//! precedence comparison never has to re-inspect strings.
//!
//! Copyright (c) 2025 libsemver contributors
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::grammar;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single dot-separated prerelease identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawIdentifier")]
pub enum Identifier {
    /// A numeric identifier, e.g. `1` in `alpha.1`
    Numeric(u64),
    /// An alphanumeric identifier, e.g. `alpha`, `rc-1`, `0a`
    AlphaNumeric(String),
}

impl Identifier {
    /// Parse one identifier, reporting failures against the whole `input`.
    pub(crate) fn parse_in(s: &str, input: &str) -> Result<Self> {
        if !grammar::is_prerelease_identifier(s) {
            let reason = if s.is_empty() {
                "empty prerelease identifier".to_string()
            } else if grammar::is_all_digits(s) {
                format!("numeric prerelease identifier '{}' has a leading zero", s)
            } else {
                format!("prerelease identifier '{}' contains a disallowed character", s)
            };
            return Err(Error::invalid_format(input, reason));
        }

        if grammar::is_all_digits(s) {
            return s.parse::<u64>().map(Identifier::Numeric).map_err(|_| {
                Error::invalid_format(
                    input,
                    format!("numeric prerelease identifier '{}' is too large", s),
                )
            });
        }

        let mut owned = String::new();
        owned
            .try_reserve_exact(s.len())
            .map_err(crate::error::exhausted("prerelease identifier"))?;
        owned.push_str(s);
        Ok(Identifier::AlphaNumeric(owned))
    }

    /// `true` for [`Identifier::Numeric`]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// The numeric value, if any
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(n) => Some(*n),
            Identifier::AlphaNumeric(_) => None,
        }
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_in(s, s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Numeric identifiers always have lower precedence than alphanumeric ones
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => {
                a.as_bytes().cmp(b.as_bytes())
            }
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Identifier::Numeric(n) => serializer.serialize_u64(*n),
            Identifier::AlphaNumeric(s) => serializer.serialize_str(s),
        }
    }
}

/// Wire shape accepted when deserializing an [`Identifier`]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Numeric(u64),
    Text(String),
}

impl TryFrom<RawIdentifier> for Identifier {
    type Error = Error;

    fn try_from(raw: RawIdentifier) -> Result<Self> {
        match raw {
            RawIdentifier::Numeric(n) => Ok(Identifier::Numeric(n)),
            RawIdentifier::Text(s) => s.parse(),
        }
    }
}
