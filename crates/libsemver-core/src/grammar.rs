//! Lexical predicates for SemVer identifiers
//!
//! ```text
//! numeric-id      := "0" | [1-9][0-9]*
//! alphanumeric-id := [0-9A-Za-z-]+ with at least one non-digit
//! metadata-id     := [0-9A-Za-z-]+
//! ```
//!
//! Copyright (c) 2025 libsemver contributors
//! Licensed under the Apache-2.0 license

/// Character class shared by every identifier kind
fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

/// `true` if `s` is non-empty and made of ASCII digits only
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit())
}

/// `0` or `[1-9][0-9]*`
pub fn is_numeric_identifier(s: &str) -> bool {
    is_all_digits(s) && (s == "0" || !s.starts_with('0'))
}

/// `[0-9A-Za-z-]+` containing at least one non-digit.
///
/// All-digit strings are never alphanumeric identifiers: in a prerelease they
/// must satisfy [`is_numeric_identifier`] instead.
pub fn is_alphanumeric_identifier(s: &str) -> bool {
    is_metadata_identifier(s) && !is_all_digits(s)
}

/// `[0-9A-Za-z-]+`, leading zeros allowed
pub fn is_metadata_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_identifier_char)
}

/// A single prerelease identifier, numeric or alphanumeric
pub fn is_prerelease_identifier(s: &str) -> bool {
    if is_all_digits(s) {
        is_numeric_identifier(s)
    } else {
        is_alphanumeric_identifier(s)
    }
}
