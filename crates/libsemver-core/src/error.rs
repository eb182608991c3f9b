//! Error types for version parsing and derivation
//!
//! Every fallible operation in this crate returns [`Result`]. Failures are
//! classified precisely enough for an adaptation layer (a CLI, an FFI shim)
//! to surface them without inspecting messages: see [`Error::kind`].
//!
//! Copyright (c) 2025 libsemver contributors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for version operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input text violates the SemVer 2.0.0 grammar
    #[error("Invalid version format '{input}': {reason}")]
    InvalidVersionFormat { input: String, reason: String },

    /// A positional accessor or bump targeted a missing release component
    #[error("Release component index {index} out of range (version has {len} components)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Allocation failed while building a version
    #[error("Resource exhausted: {context}")]
    ResourceExhausted { context: String },

    /// A bump would push a release component past `u64::MAX`
    #[error("Release component {index} cannot be incremented past {value}")]
    ReleaseOverflow { index: usize, value: u64 },
}

/// Fieldless classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidVersionFormat,
    IndexOutOfRange,
    ResourceExhausted,
    ReleaseOverflow,
}

impl ErrorKind {
    /// Stable numeric code for this failure class. `0` is reserved for success.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::InvalidVersionFormat => 1,
            ErrorKind::IndexOutOfRange => 2,
            ErrorKind::ResourceExhausted => 3,
            ErrorKind::ReleaseOverflow => 4,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidVersionFormat => write!(f, "invalid version format"),
            ErrorKind::IndexOutOfRange => write!(f, "index out of range"),
            ErrorKind::ResourceExhausted => write!(f, "resource exhausted"),
            ErrorKind::ReleaseOverflow => write!(f, "release overflow"),
        }
    }
}

impl Error {
    /// Create an invalid format error for `input`
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersionFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a resource exhaustion error
    pub fn resource_exhausted(context: impl Into<String>) -> Self {
        Self::ResourceExhausted {
            context: context.into(),
        }
    }

    /// Create a release overflow error for component `index`
    pub fn release_overflow(index: usize, value: u64) -> Self {
        Self::ReleaseOverflow { index, value }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVersionFormat { .. } => ErrorKind::InvalidVersionFormat,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::ResourceExhausted { .. } => ErrorKind::ResourceExhausted,
            Self::ReleaseOverflow { .. } => ErrorKind::ReleaseOverflow,
        }
    }

    /// The offending input, for format errors
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::InvalidVersionFormat { input, .. } => Some(input),
            _ => None,
        }
    }
}

/// Map a failed reservation to [`Error::ResourceExhausted`], naming what was
/// being allocated.
pub(crate) fn exhausted(what: &'static str) -> impl FnOnce(TryReserveError) -> Error {
    move |e| Error::resource_exhausted(format!("allocating {}: {}", what, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::invalid_format("1.02.3", "leading zero in minor component");
        assert_eq!(err.kind(), ErrorKind::InvalidVersionFormat);
        assert_eq!(err.input(), Some("1.02.3"));
        assert!(err.to_string().contains("1.02.3"));
        assert!(err.to_string().contains("leading zero"));

        let err = Error::index_out_of_range(3, 3);
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(err.input(), None);
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_kind_codes_are_distinct() {
        let codes = [
            ErrorKind::InvalidVersionFormat.code(),
            ErrorKind::IndexOutOfRange.code(),
            ErrorKind::ResourceExhausted.code(),
            ErrorKind::ReleaseOverflow.code(),
        ];
        assert!(codes.iter().all(|&c| c != 0));
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_release_overflow() {
        let err = Error::release_overflow(2, u64::MAX);
        assert_eq!(err.kind(), ErrorKind::ReleaseOverflow);
        assert_eq!(err.input(), None);
        assert!(err.to_string().contains("component 2"));
        assert_eq!(
            serde_json::to_string(&err.kind()).unwrap(),
            "\"release_overflow\""
        );
    }

    #[test]
    fn test_reservation_failure_is_resource_exhausted() {
        let mut v: Vec<u64> = Vec::new();
        let err = v
            .try_reserve_exact(usize::MAX)
            .map_err(exhausted("release components"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
        assert!(err.to_string().contains("release components"));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::IndexOutOfRange).unwrap();
        assert_eq!(json, "\"index_out_of_range\"");
    }
}
