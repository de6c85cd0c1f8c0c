use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Bad status: {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to fetch page {page}: {source}")]
    PageFetch {
        page: u32,
        source: Box<ClientError>,
    },
}
