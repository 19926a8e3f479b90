//! Folio configuration persistence
//!
//! Stores user preferences in `~/.config/folio/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::print::PrintSettings;
use crate::scan::{Scanner, DEFAULT_DENYLIST};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write config to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Characters per page for print and preview
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Characters reported as unexpected symbols by the scanner
    #[serde(default = "default_denylist")]
    pub denylist: Vec<char>,
    /// Default print settings
    #[serde(default)]
    pub print: PrintSettings,
}

fn default_page_size() -> usize {
    1800
}

fn default_denylist() -> Vec<char> {
    DEFAULT_DENYLIST.to_vec()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            denylist: default_denylist(),
            print: PrintSettings::default(),
        }
    }
}

impl FolioConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Scanner using the configured denylist
    pub fn scanner(&self) -> Scanner {
        Scanner::new(self.denylist.clone())
    }
}
