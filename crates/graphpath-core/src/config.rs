//! User configuration for graphpath
//!
//! Configuration lives in `~/.config/graphpath/config.toml`. The directory
//! can be overridden with `GRAPHPATH_CONFIG_DIR`. A missing file yields
//! the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{GraphPathError, Result};
use crate::load::LoadOptions;

pub use types::{Config, DEFAULT_HEADER_MARKER};

const CONFIG_DIR: &str = "graphpath";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRAPHPATH_CONFIG_DIR";

impl Config {
    /// Location of the config file, honoring `GRAPHPATH_CONFIG_DIR`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphPathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config from its default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load the config from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GraphPathError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to an explicit path, creating parent directories
    #[cfg(test)]
    pub(crate) fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphPathError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the rest of the program cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            bail_invalid!("separator", "\"\" (must not be empty)");
        }
        if self.header_marker.trim().is_empty() {
            bail_invalid!("header_marker", "\"\" (must not be empty)");
        }
        Ok(())
    }

    /// Loader options derived from this config
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            header_marker: Some(self.header_marker.clone()),
        }
    }
}
