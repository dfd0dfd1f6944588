//! Update availability check.

use crate::compare::compare_versions;
use std::cmp::Ordering;

/// Returns true iff `latest` strictly outranks `current`.
///
/// A malformed string on either side yields `false`: an update is only
/// reported once a well-formed, strictly greater version is confirmed.
/// Ambiguity defaults to "no update".
#[must_use]
pub fn has_update(current: &str, latest: &str) -> bool {
    matches!(compare_versions(latest, current), Ok(Ordering::Greater))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_latest_reports_update() {
        assert!(has_update("1.2.0", "1.3.0"));
        assert!(has_update("2.5.0", "v2.6.0"));
    }

    #[test]
    fn test_older_or_equal_latest_reports_none() {
        assert!(!has_update("1.3.0", "1.2.0"));
        assert!(!has_update("1.3.0", "1.3.0"));
    }

    #[test]
    fn test_pre_release_of_current_core_is_not_an_update() {
        assert!(!has_update("1.3.0", "1.3.0-rc.1"));
        assert!(has_update("1.3.0-rc.1", "1.3.0"));
    }

    #[test]
    fn test_malformed_input_reports_none() {
        assert!(!has_update("bogus", "1.0.0"));
        assert!(!has_update("1.0.0", "bogus"));
        assert!(!has_update("", ""));
    }
}
