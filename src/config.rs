use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MEGAcmd executable; `~` and `$VARS` are expanded
    pub binary: Option<String>,
    /// Run `version` once when the client is created
    pub check_binary: bool,
    /// Default output format
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: None,
            check_binary: true,
            output: OutputFormat::Human,
        }
    }
}

impl Config {
    /// Load `config.toml` from the config directory.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Configured binary with `~` and environment variables expanded.
    pub fn binary_path(&self) -> Option<PathBuf> {
        self.binary.as_deref().map(paths::expand)
    }
}
