//! The package version value type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::VersionError;
use crate::version::parser::parse_version;
use crate::version::segment::VersionSegment;

/// An immutable, parsed package version
///
/// Equality and ordering only look at the epoch and the segments, so `1.1`
/// and `1-1` compare equal while still displaying as they were written.
#[derive(Debug, Clone)]
pub struct Version {
    epoch: u64,
    segments: Vec<VersionSegment>,
    canonical_rep: String,
}

impl Version {
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        parse_version(raw)
    }

    pub(crate) fn from_parts(epoch: u64, segments: Vec<VersionSegment>, raw: &str) -> Self {
        Self {
            epoch,
            segments,
            canonical_rep: raw.to_string(),
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn segments(&self) -> &[VersionSegment] {
        &self.segments
    }

    /// The version string exactly as it was supplied
    pub fn as_str(&self) -> &str {
        &self.canonical_rep
    }

    pub fn is_pre_release(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.release_type.is_pre_release())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_rep)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical_rep)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_version(&raw).map_err(serde::de::Error::custom)
    }
}
