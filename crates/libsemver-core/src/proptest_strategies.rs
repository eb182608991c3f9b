//! Property-based testing strategies for generating versions
//!
//! Strategies produce canonical text, so every generated version is valid
//! and its string form round-trips.

#![cfg(test)]

use crate::identifier::Identifier;
use crate::version::Version;
use proptest::collection::vec;
use proptest::prelude::*;

/// Numeric identifier text without leading zeros
pub fn numeric_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        (1u64..=u64::MAX).prop_map(|n| n.to_string()),
        (1u64..20).prop_map(|n| n.to_string()),
    ]
}

/// Prerelease identifiers, numeric and alphanumeric
pub fn identifier_strategy() -> impl Strategy<Value = Identifier> {
    prop_oneof![
        (0u64..50).prop_map(Identifier::Numeric),
        any::<u64>().prop_map(Identifier::Numeric),
        "[0-9]{0,3}[A-Za-z-][0-9A-Za-z-]{0,8}".prop_map(Identifier::AlphaNumeric),
        prop::sample::select(vec!["alpha", "beta", "rc", "pre", "Alpha"])
            .prop_map(|s| Identifier::AlphaNumeric(s.to_string())),
    ]
}

/// Build metadata identifiers (leading zeros allowed)
pub fn metadata_strategy() -> impl Strategy<Value = String> {
    "[0-9A-Za-z-]{1,10}"
}

/// Canonical three-component versions
pub fn version_strategy() -> impl Strategy<Value = Version> {
    (
        vec(0u64..5, 3),
        vec(identifier_strategy(), 0..4),
        vec(metadata_strategy(), 0..3),
    )
        .prop_map(|(release, prerelease, metadata)| {
            Version::from_validated(release, prerelease, metadata)
        })
}

/// Release component values, mostly small, sometimes at the `u64` limit
pub fn release_component_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        8 => 0u64..4,
        1 => Just(u64::MAX - 1),
        1 => Just(u64::MAX),
    ]
}

/// Versions with one to five release components
pub fn extended_version_strategy() -> impl Strategy<Value = Version> {
    (
        vec(release_component_strategy(), 1..6),
        vec(identifier_strategy(), 0..3),
        vec(metadata_strategy(), 0..2),
    )
        .prop_map(|(release, prerelease, metadata)| {
            Version::from_validated(release, prerelease, metadata)
        })
}
