//! The version value type, its accessors and canonical serialization
//!
//! Copyright (c) 2025 libsemver contributors
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::identifier::Identifier;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// An immutable semantic version.
///
/// `release` holds at least one component; `prerelease` and `metadata` are
/// empty when absent. Every derivation returns a new value.
///
/// `==` is structural and includes build metadata. Use
/// [`crate::precedence::equals`] for SemVer precedence equality, which does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    release: Vec<u64>,
    prerelease: Vec<Identifier>,
    metadata: Vec<String>,
}

impl Version {
    /// Create a `major.minor.patch` release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            release: vec![major, minor, patch],
            prerelease: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Assemble a version from already validated parts
    pub(crate) fn from_validated(
        release: Vec<u64>,
        prerelease: Vec<Identifier>,
        metadata: Vec<String>,
    ) -> Self {
        debug_assert!(!release.is_empty());
        Self {
            release,
            prerelease,
            metadata,
        }
    }

    /// Release component at `index` (0 = major, 1 = minor, 2 = patch, ...)
    pub fn release_component(&self, index: usize) -> Result<u64> {
        self.release
            .get(index)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(index, self.release.len()))
    }

    /// A copy of the release components
    pub fn release(&self) -> Vec<u64> {
        self.release.clone()
    }

    /// Borrow the release components
    pub fn release_slice(&self) -> &[u64] {
        &self.release
    }

    pub fn major(&self) -> Option<u64> {
        self.release.first().copied()
    }

    pub fn minor(&self) -> Option<u64> {
        self.release.get(1).copied()
    }

    pub fn patch(&self) -> Option<u64> {
        self.release.get(2).copied()
    }

    /// Prerelease identifiers, empty for a release version
    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    /// Build metadata identifiers
    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }

    /// Prerelease identifiers joined by `.`, or an empty string
    pub fn prerelease_text(&self) -> String {
        Dotted(&self.prerelease).to_string()
    }

    /// Build metadata identifiers joined by `.`, or an empty string
    pub fn metadata_text(&self) -> String {
        Dotted(&self.metadata).to_string()
    }

    /// `true` if the version carries no prerelease label
    pub fn is_release(&self) -> bool {
        self.prerelease.is_empty()
    }

    /// `true` if the version carries a prerelease label
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// `true` if the version carries build metadata
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    pub(crate) fn release_mut(&mut self) -> &mut Vec<u64> {
        &mut self.release
    }

    pub(crate) fn clear_prerelease(&mut self) {
        self.prerelease = Vec::new();
    }

    pub(crate) fn clear_metadata(&mut self) {
        self.metadata = Vec::new();
    }
}

/// Displays `items` separated by `.`
struct Dotted<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Dotted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Dotted(&self.release))?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", Dotted(&self.prerelease))?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", Dotted(&self.metadata))?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a semantic version string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Version, E> {
                Version::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
