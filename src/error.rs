//! Error types for version parsing.
//!
//! There is one conceptual failure — a malformed version string — but the
//! kind enum records which grammar rule was violated so diagnostics can say
//! more than "bad input". Every kind collapses to the same sentinel at the
//! C ABI boundary.

use thiserror::Error;

/// Failure to parse a version string.
///
/// Carries the full offending input plus the specific grammar violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid version '{input}': {kind}")]
pub struct VersionError {
    input: String,
    #[source]
    kind: ParseErrorKind,
}

impl VersionError {
    pub(crate) fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// The input string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The specific grammar violation.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// Specific ways a version string can violate the
/// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("expected a MAJOR.MINOR.PATCH core, found {found} dot-separated components")]
    WrongComponentCount { found: usize },

    #[error("core component '{0}' is empty or contains non-digit characters")]
    InvalidNumber(String),

    #[error("core component '{0}' has a leading zero")]
    LeadingZero(String),

    #[error("numeric component '{0}' does not fit in 64 bits")]
    NumberOverflow(String),

    #[error("empty identifier in {section} section")]
    EmptyIdentifier { section: &'static str },

    #[error("identifier '{0}' contains characters outside [0-9A-Za-z-]")]
    InvalidIdentifier(String),

    #[error("input contains non-ASCII bytes")]
    NonAscii,
}

/// Convenient Result type for version-tools operations
pub type Result<T> = std::result::Result<T, VersionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_input_and_kind() {
        let err = VersionError::new("1.02.0", ParseErrorKind::LeadingZero("02".to_string()));
        let display = err.to_string();
        assert!(display.contains("1.02.0"), "missing input: {display}");
        assert!(display.contains("leading zero"), "missing kind: {display}");
    }

    #[test]
    fn test_error_source_is_kind() {
        use std::error::Error as _;

        let err = VersionError::new("x", ParseErrorKind::NonAscii);
        let source = err.source().expect("kind should be the source");
        assert!(source.to_string().contains("non-ASCII"));
    }
}
