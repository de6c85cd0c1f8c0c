//! Dot/dash-delimited version components

use std::fmt;

/// Release qualifier attached to a version segment
///
/// Ordering between qualifiers is the plain string ordering of [`ReleaseType::as_str`],
/// not release maturity: `"" < "a" < "b" < "dev" < "post" < "rc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReleaseType {
    /// Plain numeric segment
    #[default]
    Final,
    /// Alpha pre-release (`a`)
    Alpha,
    /// Beta pre-release (`b`)
    Beta,
    /// Release candidate (`rc`, legacy `c`)
    ReleaseCandidate,
    /// Post release (`post`)
    Post,
    /// Development release (`dev`)
    Dev,
}

impl ReleaseType {
    /// Returns the qualifier tag as it appears in a version string
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Final => "",
            ReleaseType::Alpha => "a",
            ReleaseType::Beta => "b",
            ReleaseType::ReleaseCandidate => "rc",
            ReleaseType::Post => "post",
            ReleaseType::Dev => "dev",
        }
    }

    pub fn is_pre_release(&self) -> bool {
        matches!(
            self,
            ReleaseType::Alpha | ReleaseType::Beta | ReleaseType::ReleaseCandidate
        )
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One component of a [`Version`](crate::version::Version)
///
/// A plain numeric segment always has [`ReleaseType::Final`] and a
/// `release_type_version` of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VersionSegment {
    pub digit: u64,
    pub release_type: ReleaseType,
    pub release_type_version: u64,
}

impl VersionSegment {
    pub fn numeric(digit: u64) -> Self {
        Self {
            digit,
            release_type: ReleaseType::Final,
            release_type_version: 0,
        }
    }

    pub fn qualified(digit: u64, release_type: ReleaseType, release_type_version: u64) -> Self {
        Self {
            digit,
            release_type,
            release_type_version,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.release_type == ReleaseType::Final
    }
}

impl fmt::Display for VersionSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.release_type {
            ReleaseType::Final => write!(f, "{}", self.digit),
            ReleaseType::Post | ReleaseType::Dev => {
                write!(f, "{}{}", self.release_type, self.digit)
            }
            _ => write!(
                f,
                "{}{}{}",
                self.digit, self.release_type, self.release_type_version
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ReleaseType::Final, "")]
    #[case(ReleaseType::Alpha, "a")]
    #[case(ReleaseType::Beta, "b")]
    #[case(ReleaseType::ReleaseCandidate, "rc")]
    #[case(ReleaseType::Post, "post")]
    #[case(ReleaseType::Dev, "dev")]
    fn release_type_as_str_returns_tag(#[case] release_type: ReleaseType, #[case] tag: &str) {
        assert_eq!(release_type.as_str(), tag);
    }

    #[test]
    fn numeric_segment_has_no_qualifier() {
        let segment = VersionSegment::numeric(7);

        assert!(segment.is_numeric());
        assert_eq!(segment.release_type_version, 0);
    }

    #[rstest]
    #[case(VersionSegment::numeric(3), "3")]
    #[case(VersionSegment::qualified(0, ReleaseType::Beta, 10), "0b10")]
    #[case(VersionSegment::qualified(2, ReleaseType::Post, 0), "post2")]
    fn display_renders_segment(#[case] segment: VersionSegment, #[case] expected: &str) {
        assert_eq!(segment.to_string(), expected);
    }
}
