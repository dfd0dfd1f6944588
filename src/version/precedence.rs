//! The SemVer precedence relation.
//!
//! Equality and ordering are implemented together so they stay consistent:
//! both go through [`Version::precedence`], and build metadata participates
//! in neither.

use super::{Identifier, Version};
use std::cmp::Ordering;

impl Version {
    /// Rank `self` against `other` per SemVer precedence.
    ///
    /// Numeric core first, then the pre-release rules: a release outranks
    /// any pre-release of the same core, identifiers compare pairwise, and
    /// a strict prefix ranks below the longer sequence. Never mutates and
    /// never allocates.
    #[must_use]
    pub fn precedence(&self, other: &Self) -> Ordering {
        self.core()
            .cmp(&other.core())
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }

    fn core(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

fn compare_pre_release(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A release outranks any pre-release of the same core.
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Slice ordering is pairwise `Identifier` comparison with the
        // strict-prefix-is-less rule, which is exactly the SemVer relation.
        (false, false) => a.cmp(b),
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.precedence(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence(other)
    }
}
