use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}
