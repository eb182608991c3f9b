//! SemVer precedence ordering
//!
//! Precedence compares release components numerically, ranks a prerelease
//! below its release, and then compares prerelease identifiers pairwise.
//! Build metadata never affects precedence. Release sequences of different
//! length are compared over the shorter one, then the longer one wins.
//!
//! `Version` also implements [`Ord`]: precedence first, then build metadata
//! as a tie-breaker, so that `Ord` agrees with the structural `Eq`.
//!
//! Copyright (c) 2025 libsemver contributors
//! Licensed under the Apache-2.0 license

use crate::version::Version;
use std::cmp::Ordering;

/// Precedence of `a` relative to `b`, ignoring build metadata
pub fn compare(a: &Version, b: &Version) -> Ordering {
    // Slice ordering is lexicographic with the shorter prefix ranked lower
    a.release_slice()
        .cmp(b.release_slice())
        .then_with(|| match (a.is_release(), b.is_release()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.prerelease().cmp(b.prerelease()),
        })
}

/// `true` if `a` and `b` have equal precedence (build metadata ignored)
pub fn equals(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Equal
}

/// `true` if `a` has lower precedence than `b`
pub fn less(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Less
}

/// `true` if `a` has higher precedence than `b`
pub fn greater(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Greater
}

/// Full structural equality, build metadata included
pub fn identical(a: &Version, b: &Version) -> bool {
    equals(a, b) && a.metadata() == b.metadata()
}

impl Version {
    /// Precedence of `self` relative to `other`, see [`compare`]
    pub fn precedence_cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }

    /// Equal precedence, build metadata ignored
    pub fn precedence_eq(&self, other: &Self) -> bool {
        equals(self, other)
    }

    /// Equal precedence and identical build metadata
    pub fn is_identical_to(&self, other: &Self) -> bool {
        identical(self, other)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other).then_with(|| self.metadata().cmp(other.metadata()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
