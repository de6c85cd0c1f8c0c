//! Package deletion

#[cfg(test)]
use mockall::automock;

use crate::client::error::ClientError;
use crate::package::Package;

/// Trait for removing packages from a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageRemover: Send + Sync {
    /// Marks the package as deleted on the server
    async fn delete_package(&self, package: &Package) -> Result<(), ClientError>;
}
