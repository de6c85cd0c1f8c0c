//! Cross-ecosystem package version model
//!
//! Parses the version strings RDepot reports for R and Python packages into a
//! single [`Version`] type with a total ordering, so packages of any technology
//! can be compared with the same comparator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   "1!2.0"   │────▶│   Parser    │────▶│   Version   │
//! │  (raw str)  │     │ (segments)  │     │ (ordering)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`parser`]: Version string parsing (numeric, R-style and PEP 440-like dialects)
//! - [`segment`]: A single version component and its release qualifier
//! - [`ordering`]: `Ord`/`Eq` implementations for segments and versions
//! - [`types`]: The `Version` value type and its serde representation
//! - [`error`]: Parse error taxonomy

pub mod error;
pub mod ordering;
pub mod parser;
pub mod segment;
pub mod types;

pub use error::VersionError;
pub use parser::parse_version;
pub use segment::{ReleaseType, VersionSegment};
pub use types::Version;
