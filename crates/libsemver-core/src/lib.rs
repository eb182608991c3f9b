//! libsemver core - Semantic Versioning 2.0.0 value type
//!
//! This crate parses, renders, compares and derives semantic versions.
//! Everything here is pure and synchronous: no I/O, no logging, no shared
//! state. Failures come back as classified [`Error`] values.
//!
//! # Main Components
//!
//! - **Grammar**: lexical predicates for numeric, alphanumeric and metadata identifiers
//! - **Parser**: strict `major.minor.patch[-prerelease][+metadata]` parsing
//! - **Version**: the immutable value type, its accessors and canonical `Display`
//! - **Precedence**: SemVer ordering that ignores build metadata
//! - **Derivation**: bump and strip operations returning new versions
//!
//! # Example
//!
//! ```
//! use libsemver_core::{precedence, Version};
//!
//! let current = Version::parse("1.2.3-beta+x").unwrap();
//! let next = current.bump_major().unwrap();
//! assert_eq!(next.to_string(), "2.0.0");
//!
//! let a = Version::parse("1.2.3+a").unwrap();
//! let b = Version::parse("1.2.3+b").unwrap();
//! assert!(precedence::equals(&a, &b));
//! assert!(!precedence::identical(&a, &b));
//! ```
//!
//! Copyright (c) 2025 libsemver contributors
//! Licensed under the Apache-2.0 license

pub mod derivation;
pub mod error;
pub mod grammar;
pub mod identifier;
pub mod parser;
pub mod precedence;
pub mod version;

mod proptest_strategies;

pub use error::{Error, ErrorKind, Result};
pub use identifier::Identifier;
pub use parser::parse;
pub use precedence::{compare, equals, greater, identical, less};
pub use version::Version;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
