//! **SemVer parsing, precedence comparison, and update detection.**
//!
//! `version-tools` parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings
//! into a structured [`Version`] and ranks them per the Semantic Versioning
//! precedence rules: numeric core first, then pre-release identifiers, with
//! build metadata carried but never compared. On top of the comparator sits
//! a single derived operation, [`has_update`], which reports an update only
//! when a well-formed, strictly greater version is confirmed.
//!
//! Everything is pure and synchronous: no I/O, no shared state, no locking.
//! A [`Version`] is built fresh from its string on every call and dropped
//! after the comparison that consumed it, so the functions are safe to call
//! concurrently from any number of threads.
//!
//! ## Modules
//!
//! - **[`version`]**: the [`Version`] model, its parser, and the precedence
//!   relation (`Ord`/`Eq` ignore build metadata by construction).
//! - **[`compare`]**: [`compare_versions`], the string-in/ordering-out
//!   boundary function. Parse failure is the `Err` arm of a proper
//!   [`Result`], not a magic value.
//! - **[`update`]**: [`has_update`], the fail-safe update check.
//! - **[`ffi`]**: `extern "C"` exports of the two boundary functions for
//!   host applications loading this crate as a `cdylib`, where the parse
//!   failure narrows to the `-999` sentinel.
//! - **[`error`]**: the [`VersionError`] type and its grammar-violation
//!   kinds.
//!
//! ## Getting started
//!
//! ```
//! use std::cmp::Ordering;
//! use version_tools::{compare_versions, has_update, Version};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     assert_eq!(compare_versions("1.0.0", "1.0.0-alpha")?, Ordering::Greater);
//!     assert!(has_update("1.2.0", "1.3.0"));
//!
//!     let version = Version::parse("1.0.0-beta.2+sha.5114f85")?;
//!     assert!(version.is_pre_release());
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod compare;
pub mod error;
pub mod ffi;
pub mod update;
pub mod version;

// Re-export main types for convenience
pub use compare::compare_versions;
pub use error::{ParseErrorKind, Result, VersionError};
pub use ffi::VERSION_PARSE_ERROR;
pub use update::has_update;
pub use version::{Identifier, Version};
