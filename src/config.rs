use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Host used when neither a flag, the environment nor the config file names one
pub const DEFAULT_HOST: &str = "http://localhost";

/// Maximum number of page requests in flight while aggregating a listing
pub const FETCH_CONCURRENCY: usize = 4;

/// Package technology served by RDepot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Technology {
    R,
    Python,
    /// Every technology; uses the technology-independent endpoints
    #[default]
    All,
}

impl Technology {
    pub fn as_str(&self) -> &'static str {
        match self {
            Technology::R => "r",
            Technology::Python => "python",
            Technology::All => "all",
        }
    }

    /// API path segment, or `None` for the technology-independent endpoints
    pub fn path_segment(&self) -> Option<&'static str> {
        match self {
            Technology::All => None,
            technology => Some(technology.as_str()),
        }
    }
}

/// Resolved connection settings passed to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RDepotConfig {
    pub host: String,
    pub token: Option<String>,
    pub technology: Technology,
}

impl Default for RDepotConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            token: None,
            technology: Technology::default(),
        }
    }
}

/// Settings given on the command line or through `RDEPOT_*` environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub token: Option<String>,
    pub technology: Option<Technology>,
}

/// Config file structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FileConfig {
    pub host: Option<String>,
    pub token: Option<String>,
    pub technology: Option<Technology>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl FileConfig {
    /// Load the config file at `path`; a missing file yields an empty config
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl RDepotConfig {
    /// Overrides win over the config file, which wins over the defaults
    pub fn resolve(overrides: ConfigOverrides, file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: overrides.host.or(file.host).unwrap_or(defaults.host),
            token: overrides.token.or(file.token).or(defaults.token),
            technology: overrides
                .technology
                .or(file.technology)
                .unwrap_or(defaults.technology),
        }
    }
}

/// Returns the path to the config file.
/// Uses $XDG_CONFIG_HOME/rdepot/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/rdepot/config.json,
/// or ./rdepot/config.json if neither is available.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("rdepot")
}
