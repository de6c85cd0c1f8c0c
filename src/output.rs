//! Command output formatting

use serde::Serialize;

use crate::package::Versioned;

/// How selected packages are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of package records
    #[default]
    Json,
    /// One `<name> <version>` line per package
    Summary,
}

pub fn format_packages<P>(
    packages: &[P],
    format: OutputFormat,
) -> Result<String, serde_json::Error>
where
    P: Versioned + Serialize,
{
    match format {
        OutputFormat::Json => format_json(packages),
        OutputFormat::Summary => Ok(packages
            .iter()
            .map(|package| format!("{}\n", package.summary()))
            .collect()),
    }
}

pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
