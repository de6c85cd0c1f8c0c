//! Filters over a complete package listing
//!
//! The archived and latest filters need every version of a package before
//! they can decide anything, so they run on the fully aggregated listing.

use glob::Pattern;
use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::package::error::FilterError;
use crate::package::types::Versioned;

/// Keep packages whose name matches a shell glob pattern, preserving input order
pub fn filter_by_name<P: Versioned>(
    packages: Vec<P>,
    pattern: &str,
) -> Result<Vec<P>, FilterError> {
    let glob = Pattern::new(pattern).map_err(|source| FilterError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(packages
        .into_iter()
        .filter(|package| glob.matches(package.name()))
        .collect())
}

/// Keep packages whose version is strictly below the highest version of their name
pub fn filter_archived<P: Versioned>(packages: Vec<P>) -> Vec<P> {
    let archived: Vec<bool> = {
        let latest = latest_by_name(&packages);
        packages
            .iter()
            .map(|package| {
                latest
                    .get(package.name())
                    .is_some_and(|&index| package.version() < packages[index].version())
            })
            .collect()
    };

    packages
        .into_iter()
        .zip(archived)
        .filter_map(|(package, archived)| archived.then_some(package))
        .collect()
}

/// Keep one package per name, the one with the highest version
///
/// Names are returned in the order they first appear in the listing.
pub fn filter_latest<P: Versioned>(packages: Vec<P>) -> Vec<P> {
    let order: Vec<usize> = latest_by_name(&packages).into_values().collect();
    let mut slots: Vec<Option<P>> = packages.into_iter().map(Some).collect();

    order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}

/// Index of the highest version per name
///
/// On ties the earliest package wins: a later package only replaces the
/// tracked one when its version is strictly greater.
fn latest_by_name<P: Versioned>(packages: &[P]) -> IndexMap<&str, usize> {
    let mut latest: IndexMap<&str, usize> = IndexMap::new();

    for (index, package) in packages.iter().enumerate() {
        match latest.entry(package.name()) {
            Entry::Occupied(mut entry) => {
                if package.version() > packages[*entry.get()].version() {
                    entry.insert(index);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
        }
    }

    latest
}
