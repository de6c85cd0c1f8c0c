//! RDepot API access
//!
//! # Modules
//!
//! - [`page`]: Paginated source trait and the all-or-nothing page aggregator
//! - [`remover`]: Package deletion trait
//! - [`rdepot`]: reqwest-backed implementation against the RDepot manager API
//! - [`error`]: Client error types

pub mod error;
pub mod page;
pub mod rdepot;
pub mod remover;

pub use error::ClientError;
pub use page::{Page, PageMeta, PageSource, fetch_all};
pub use rdepot::{PackageListing, RDepotClient};
pub use remover::PackageRemover;
