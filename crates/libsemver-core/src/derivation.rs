//! Version derivation: bumping and stripping
//!
//! Every operation borrows its input and returns a new [`Version`].
//!
//! Copyright (c) 2025 libsemver contributors
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::version::Version;

impl Version {
    /// Increment release component `index`, zero every later component and
    /// drop prerelease and build metadata.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index` is not a release
    /// component of this version, and with [`Error::ReleaseOverflow`] when that
    /// component is already `u64::MAX`.
    pub fn bump(&self, index: usize) -> Result<Self> {
        let len = self.release_slice().len();
        if index >= len {
            return Err(Error::index_out_of_range(index, len));
        }

        let current = self.release_slice()[index];
        let bumped = current
            .checked_add(1)
            .ok_or_else(|| Error::release_overflow(index, current))?;

        let mut next = self.clone();
        next.clear_prerelease();
        next.clear_metadata();

        let release = next.release_mut();
        release[index] = bumped;
        for component in &mut release[index + 1..] {
            *component = 0;
        }
        Ok(next)
    }

    /// `X.Y.Z` -> `(X+1).0.0`
    pub fn bump_major(&self) -> Result<Self> {
        self.bump(0)
    }

    /// `X.Y.Z` -> `X.(Y+1).0`
    pub fn bump_minor(&self) -> Result<Self> {
        self.bump(1)
    }

    /// `X.Y.Z` -> `X.Y.(Z+1)`
    pub fn bump_patch(&self) -> Result<Self> {
        self.bump(2)
    }

    /// Copy without the prerelease label; build metadata is kept
    pub fn strip_prerelease(&self) -> Self {
        let mut next = self.clone();
        next.clear_prerelease();
        next
    }

    /// Copy without build metadata; the prerelease label is kept
    pub fn strip_metadata(&self) -> Self {
        let mut next = self.clone();
        next.clear_metadata();
        next
    }
}
