use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("invalid epoch in version {version}")]
    InvalidEpoch { version: String },

    #[error("invalid segment '{segment}' in version {version}")]
    InvalidSegment { segment: String, version: String },

    #[error("unrecognized segment '{segment}' in version {version}")]
    UnrecognizedSegment { segment: String, version: String },
}
