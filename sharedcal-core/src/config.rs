//! sharedcal configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SharedCalError, SharedCalResult};

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("sharedcal"))
        .unwrap_or_else(|| PathBuf::from(".sharedcal"))
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Configuration at ~/.config/sharedcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SharedCalConfig {
    /// Where the record collections are stored.
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Name or email used when `--user` isn't given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

impl Default for SharedCalConfig {
    fn default() -> Self {
        SharedCalConfig {
            data_dir: default_data_dir(),
            default_user: None,
        }
    }
}

impl SharedCalConfig {
    pub fn config_path() -> SharedCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SharedCalError::Config("Could not determine config directory".into()))?
            .join("sharedcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means defaults.
    pub fn load() -> SharedCalResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> SharedCalResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SharedCalError::Config(format!("Could not read config file: {e}")))?;

        toml::from_str(&content).map_err(|e| {
            SharedCalError::Config(format!("Invalid config file {}: {e}", path.display()))
        })
    }

    /// Write the config to `path`, creating its directory.
    pub fn save_to(&self, path: &Path) -> SharedCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SharedCalError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SharedCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| SharedCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
