//! String-level comparison boundary.

use crate::error::Result;
use crate::version::Version;
use std::cmp::Ordering;

/// Compare two version strings per SemVer precedence.
///
/// Both inputs are parsed in full before any comparison runs; a malformed
/// string on either side short-circuits with its parse error. A leading
/// `v` or `V` (common in release tags) is tolerated here —
/// [`Version::parse`] itself stays strict.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering> {
    let a = Version::parse(strip_tag_prefix(a))?;
    let b = Version::parse(strip_tag_prefix(b))?;
    Ok(a.cmp(&b))
}

fn strip_tag_prefix(text: &str) -> &str {
    text.strip_prefix('v')
        .or_else(|| text.strip_prefix('V'))
        .unwrap_or(text)
}
