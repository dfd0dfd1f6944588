//! Version string parsing.
//!
//! Grammar: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`. The build-metadata
//! section is split off first (everything after the first `+`), then the
//! pre-release section (everything after the first `-` of the remainder),
//! and the prefix must be exactly three dot-separated decimal integers.
//! A version either parses completely or the whole call fails; there are
//! no partial results.

use super::{Identifier, Version};
use crate::error::{ParseErrorKind, Result, VersionError};
use std::str::FromStr;

impl Version {
    /// Parse a version string.
    ///
    /// Strict: no surrounding whitespace, no `v` prefix (the string-level
    /// boundary in [`crate::compare`] tolerates one), ASCII only. Leading
    /// zeros in core components are rejected; integer overflow of a
    /// component is rejected rather than wrapped.
    pub fn parse(input: &str) -> Result<Self> {
        // SemVer identifiers are ASCII-only; checking up front lets the
        // rest of the parser reason in bytes.
        if !input.is_ascii() {
            return Err(VersionError::new(input, ParseErrorKind::NonAscii));
        }

        let (rest, build) = match input.split_once('+') {
            Some((head, meta)) => (head, Some(meta)),
            None => (input, None),
        };
        let (core, pre) = match rest.split_once('-') {
            Some((head, pre)) => (head, Some(pre)),
            None => (rest, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::new(
                input,
                ParseErrorKind::WrongComponentCount { found: parts.len() },
            ));
        }
        let major = parse_core_component(input, parts[0])?;
        let minor = parse_core_component(input, parts[1])?;
        let patch = parse_core_component(input, parts[2])?;

        let pre_release = match pre {
            None => Vec::new(),
            Some(section) => section
                .split('.')
                .map(|id| parse_pre_release_identifier(input, id))
                .collect::<Result<_>>()?,
        };

        let build_metadata = match build {
            None => Vec::new(),
            Some(section) => section
                .split('.')
                .map(|id| {
                    validate_identifier(input, id, "build-metadata")?;
                    Ok(id.to_owned())
                })
                .collect::<Result<_>>()?,
        };

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        })
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse one core component: non-empty, digits only, no leading zero
/// unless the value is exactly `0`, and representable in a `u64`.
fn parse_core_component(input: &str, text: &str) -> Result<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::new(
            input,
            ParseErrorKind::InvalidNumber(text.to_owned()),
        ));
    }
    if text.len() > 1 && text.starts_with('0') {
        return Err(VersionError::new(
            input,
            ParseErrorKind::LeadingZero(text.to_owned()),
        ));
    }
    text.parse().map_err(|_| {
        VersionError::new(input, ParseErrorKind::NumberOverflow(text.to_owned()))
    })
}

/// Classify one pre-release identifier as numeric or alphanumeric.
fn parse_pre_release_identifier(input: &str, text: &str) -> Result<Identifier> {
    validate_identifier(input, text, "pre-release")?;
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Identifier::AlphaNumeric(text.to_owned()));
    }
    if text.len() > 1 && text.starts_with('0') {
        // SemVer rule: an all-digit identifier with a leading zero is
        // alphanumeric, not invalid.
        return Ok(Identifier::AlphaNumeric(text.to_owned()));
    }
    text.parse().map(Identifier::Numeric).map_err(|_| {
        VersionError::new(input, ParseErrorKind::NumberOverflow(text.to_owned()))
    })
}

/// Identifiers in either optional section: non-empty, `[0-9A-Za-z-]` only.
/// Enforced at the byte level; the up-front ASCII check already excluded
/// multi-byte characters.
fn validate_identifier(input: &str, text: &str, section: &'static str) -> Result<()> {
    if text.is_empty() {
        return Err(VersionError::new(
            input,
            ParseErrorKind::EmptyIdentifier { section },
        ));
    }
    if !text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(VersionError::new(
            input,
            ParseErrorKind::InvalidIdentifier(text.to_owned()),
        ));
    }
    Ok(())
}
