//! Command pipelines behind the `rdepot` subcommands
//!
//! Commands receive their collaborators and settings explicitly, so they can be
//! driven by the CLI or by tests with fake sources.

pub mod packages;

use thiserror::Error;

use crate::client::ClientError;
use crate::package::FilterError;

pub use packages::{PackageSelection, delete_packages, list_packages, select_packages};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("archived filter can only be used when filtering by repository")]
    ArchivedWithoutRepository,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("could not delete package ({summary}): {source}")]
    Delete {
        summary: String,
        source: ClientError,
    },

    #[error("Failed to format output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
