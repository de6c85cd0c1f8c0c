//! Total ordering over versions
//!
//! Segments compare by digit, then by the release qualifier's tag string, then by
//! the qualifier's version. Qualifier tags compare as plain strings, so `1.0rc1`
//! sorts after `1.0b10` but `1.0a1` sorts before `1.0b10`.
//!
//! Versions compare by epoch first, then segment by segment. When every shared
//! segment ties, the version with fewer segments is the lesser one (`1 < 1.0`).

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::version::segment::VersionSegment;
use crate::version::types::Version;

impl Ord for VersionSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digit
            .cmp(&other.digit)
            .then_with(|| self.release_type.as_str().cmp(other.release_type.as_str()))
            .then_with(|| self.release_type_version.cmp(&other.release_type_version))
    }
}

impl PartialOrd for VersionSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch()
            .cmp(&other.epoch())
            .then_with(|| self.segments().cmp(other.segments()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch().hash(state);
        self.segments().hash(state);
    }
}
