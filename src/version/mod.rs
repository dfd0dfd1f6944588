//! The parsed version model.
//!
//! A [`Version`] is the structured form of a
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` string. Parsing lives in the
//! `parse` submodule (reached via [`Version::parse`] / `FromStr`), the
//! precedence relation in the `precedence` submodule.

mod parse;
mod precedence;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dot-separated pre-release identifier.
///
/// Classification happens exactly once, at parse time, and the enum makes
/// re-classification impossible afterwards. Variant order is load-bearing:
/// a numeric identifier always ranks below an alphanumeric one, numerics
/// compare by value, alphanumerics byte-lexically — which is exactly what
/// the derived `Ord` produces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Identifier {
    /// All-digit identifier without a leading zero, compared by value.
    Numeric(u64),
    /// Any other identifier (including all-digit ones with a leading zero,
    /// which SemVer classifies as alphanumeric rather than rejecting).
    AlphaNumeric(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// A fully parsed semantic version.
///
/// Construct one with [`Version::parse`]; there is no way to build an
/// invalid value. Equality and ordering follow SemVer precedence, so
/// `build_metadata` participates in neither — two versions differing only
/// in build metadata are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release identifiers; empty for a release version.
    pub pre_release: Vec<Identifier>,
    /// Build metadata identifiers, carried verbatim and never compared.
    pub build_metadata: Vec<String>,
}

impl Version {
    /// True if this version carries pre-release identifiers.
    #[must_use]
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (i, id) in self.pre_release.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{id}")?;
        }
        for (i, id) in self.build_metadata.iter().enumerate() {
            f.write_str(if i == 0 { "+" } else { "." })?;
            f.write_str(id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrips_full_version() {
        let input = "1.2.3-alpha.1+build.2024";
        let version = Version::parse(input).unwrap();
        assert_eq!(version.to_string(), input);
    }

    #[test]
    fn test_display_plain_release() {
        let version = Version::parse("10.0.3").unwrap();
        assert_eq!(version.to_string(), "10.0.3");
        assert!(!version.is_pre_release());
    }

    #[test]
    fn test_serde_shape() {
        let version = Version::parse("1.0.0-rc.1+exp").unwrap();
        let value = serde_json::to_value(&version).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "major": 1,
                "minor": 0,
                "patch": 0,
                "pre_release": [{"AlphaNumeric": "rc"}, {"Numeric": 1}],
                "build_metadata": ["exp"],
            })
        );
    }
}
