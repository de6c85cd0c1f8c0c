//! `packages list` and `packages delete`

use std::io::Write;

use tracing::{debug, info};

use crate::client::{PackageRemover, PageSource, fetch_all};
use crate::commands::CommandError;
use crate::output::{OutputFormat, format_packages};
use crate::package::{Package, Versioned, filter_archived, filter_by_name, filter_latest};

/// Which packages a command operates on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSelection {
    /// Shell glob applied to package names
    pub name: Option<String>,
    pub repository: Option<String>,
    /// Keep only versions superseded by a newer one
    pub archived: bool,
    /// Keep only the newest version of each package
    pub latest: bool,
}

impl PackageSelection {
    /// Rejects selections that cannot be evaluated, before anything is fetched
    pub fn validate(&self) -> Result<(), CommandError> {
        if self.archived && self.repository.is_none() {
            return Err(CommandError::ArchivedWithoutRepository);
        }
        Ok(())
    }

    /// Version filters run first, on the complete listing; the name filter last.
    pub fn apply<P: Versioned>(&self, packages: Vec<P>) -> Result<Vec<P>, CommandError> {
        let packages = if self.archived {
            filter_archived(packages)
        } else if self.latest {
            filter_latest(packages)
        } else {
            packages
        };

        match &self.name {
            Some(pattern) => Ok(filter_by_name(packages, pattern)?),
            None => Ok(packages),
        }
    }
}

/// Fetch the complete listing from `source` and apply `selection` to it
pub async fn select_packages<S>(
    source: &S,
    selection: &PackageSelection,
) -> Result<Vec<Package>, CommandError>
where
    S: PageSource<Package> + ?Sized,
{
    selection.validate()?;

    let packages = fetch_all(source).await?;
    let total = packages.len();
    let selected = selection.apply(packages)?;

    debug!("Selected {} of {} packages", selected.len(), total);
    Ok(selected)
}

pub async fn list_packages<S>(
    source: &S,
    selection: &PackageSelection,
    format: OutputFormat,
) -> Result<String, CommandError>
where
    S: PageSource<Package> + ?Sized,
{
    let packages = select_packages(source, selection).await?;
    Ok(format_packages(&packages, format)?)
}

/// Delete the selected packages one at a time, reporting each on `out`
///
/// The first failed deletion stops the command; packages before it stay
/// deleted. Returns the number of packages deleted (or that would be).
pub async fn delete_packages<S, R>(
    source: &S,
    remover: &R,
    selection: &PackageSelection,
    dry_run: bool,
    out: &mut dyn Write,
) -> Result<usize, CommandError>
where
    S: PageSource<Package> + ?Sized,
    R: PackageRemover + ?Sized,
{
    let packages = select_packages(source, selection).await?;

    for package in &packages {
        let summary = package.summary();

        if dry_run {
            writeln!(out, "would be deleted: {}", summary)?;
            continue;
        }

        remover
            .delete_package(package)
            .await
            .map_err(|source| CommandError::Delete {
                summary: summary.clone(),
                source,
            })?;
        writeln!(out, "deleted {}", summary)?;
    }

    info!("Processed {} packages (dry run: {})", packages.len(), dry_run);
    Ok(packages.len())
}
