//! Package record types

use serde::{Deserialize, Serialize};

use crate::version::Version;

/// Anything that carries a package name and a parsed version
///
/// The listing filters only need these two accessors, so they work on any
/// record type regardless of the technology it came from.
pub trait Versioned {
    /// Grouping key (e.g., "accrued", "numpy")
    fn name(&self) -> &str;

    fn version(&self) -> &Version;

    /// One-line description used in command output: `<name> <version>`
    fn summary(&self) -> String {
        format!("{} {}", self.name(), self.version())
    }
}

/// Repository a package is published in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRef {
    pub id: u64,
    pub name: String,
    pub publication_uri: Option<String>,
}

/// Package as reported by the RDepot manager API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: u64,
    pub name: String,
    pub version: Version,
    /// "R" or "Python"; only present on technology-independent listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    pub repository: Option<RepositoryRef>,
    pub submission_id: Option<u64>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub depends: Option<String>,
    pub imports: Option<String>,
    pub suggests: Option<String>,
    pub system_requirements: Option<String>,
    pub license: Option<String>,
    pub md5sum: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub deleted: bool,
}

impl Package {
    /// Creates a package with only the identifying fields set
    pub fn new(id: u64, name: &str, version: Version) -> Self {
        Self {
            id,
            name: name.to_string(),
            version,
            technology: None,
            repository: None,
            submission_id: None,
            description: None,
            author: None,
            title: None,
            url: None,
            source: None,
            depends: None,
            imports: None,
            suggests: None,
            system_requirements: None,
            license: None,
            md5sum: None,
            active: true,
            deleted: false,
        }
    }
}

impl Versioned for Package {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &Version {
        &self.version
    }
}
