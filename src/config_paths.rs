//! Centralized configuration paths for folio
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/folio/`
//! - Windows: `%APPDATA%\folio\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::config::ConfigError;

const APP_DIR: &str = "folio";

/// Base config directory for folio
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/folio`
///   - Else: `~/.config/folio`
///
/// Windows:
///   - `%APPDATA%\folio`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/folio/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/folio/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create `path` and any missing parents
pub(crate) fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(path).map_err(|source| ConfigError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure the logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, ConfigError> {
    let logs = logs_dir().ok_or(ConfigError::NoConfigDir)?;
    ensure_dir(&logs)?;
    Ok(logs)
}
