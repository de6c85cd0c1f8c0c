//! Version string parsing
//!
//! Accepts three dialects without a dialect flag:
//! - plain dotted numerics (`1.2.3`)
//! - R-style versions mixing `-` and `.` (`1.2-3`)
//! - PEP 440-like versions with an epoch and release qualifiers (`1!2.0rc1`, `1.0.post2`)

use crate::version::error::VersionError;
use crate::version::segment::{ReleaseType, VersionSegment};
use crate::version::types::Version;

/// Pre-release markers in lookup order. `c` is the legacy spelling of `rc`.
const PRE_RELEASE_TOKENS: [(&str, ReleaseType); 4] = [
    ("a", ReleaseType::Alpha),
    ("b", ReleaseType::Beta),
    ("rc", ReleaseType::ReleaseCandidate),
    ("c", ReleaseType::ReleaseCandidate),
];

const POST_OR_DEV_TOKENS: [(&str, ReleaseType); 2] =
    [("post", ReleaseType::Post), ("dev", ReleaseType::Dev)];

/// Parse a raw version string into a [`Version`]
///
/// The raw string is kept verbatim as the canonical representation.
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    let (epoch, rest) = match raw.split_once('!') {
        Some((epoch, rest)) => {
            let epoch = epoch.parse::<u64>().map_err(|_| VersionError::InvalidEpoch {
                version: raw.to_string(),
            })?;
            (epoch, rest)
        }
        None => (0, raw),
    };

    let dotted = rest.replace('-', ".");
    let segments = dotted
        .split('.')
        .enumerate()
        .map(|(index, part)| parse_part(index, part, raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Version::from_parts(epoch, segments, raw))
}

fn parse_part(index: usize, part: &str, raw: &str) -> Result<VersionSegment, VersionError> {
    if let Ok(digit) = part.parse::<u64>() {
        return Ok(VersionSegment::numeric(digit));
    }

    // A version must start with a numeric component
    if index == 0 {
        return Err(invalid_segment(part, raw));
    }

    parse_qualified_segment(part, raw)
}

fn parse_qualified_segment(part: &str, raw: &str) -> Result<VersionSegment, VersionError> {
    let pre_release = PRE_RELEASE_TOKENS.iter().find_map(|(token, release_type)| {
        part.split_once(token)
            .map(|(leading, trailing)| (leading, trailing, *release_type))
    });

    if let Some((leading, trailing, release_type)) = pre_release {
        let digit = leading
            .parse::<u64>()
            .map_err(|_| invalid_segment(part, raw))?;
        let release_type_version = if trailing.is_empty() {
            0
        } else {
            trailing
                .parse::<u64>()
                .map_err(|_| invalid_segment(part, raw))?
        };
        return Ok(VersionSegment::qualified(
            digit,
            release_type,
            release_type_version,
        ));
    }

    let post_or_dev = POST_OR_DEV_TOKENS.iter().find_map(|(token, release_type)| {
        part.split_once(token)
            .map(|(_, trailing)| (trailing, *release_type))
    });

    if let Some((trailing, release_type)) = post_or_dev {
        let digit = trailing
            .parse::<u64>()
            .map_err(|_| invalid_segment(part, raw))?;
        return Ok(VersionSegment::qualified(digit, release_type, 0));
    }

    Err(VersionError::UnrecognizedSegment {
        segment: part.to_string(),
        version: raw.to_string(),
    })
}

fn invalid_segment(part: &str, raw: &str) -> VersionError {
    VersionError::InvalidSegment {
        segment: part.to_string(),
        version: raw.to_string(),
    }
}
