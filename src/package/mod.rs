//! Package records and the filters applied to a complete package listing
//!
//! - [`types`]: The RDepot package record and the `Versioned` capability
//! - [`filter`]: Name glob, archived and latest filters
//! - [`error`]: Filter errors

pub mod error;
pub mod filter;
pub mod types;

pub use error::FilterError;
pub use filter::{filter_archived, filter_by_name, filter_latest};
pub use types::{Package, RepositoryRef, Versioned};
