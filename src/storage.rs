//! Raw text load/save
//!
//! Contents are opaque strings; no format is parsed here.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a whole file as text
pub fn load_text(path: &Path) -> Result<String, StorageError> {
    let text = std::fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// Write text to a file, creating parent directories as needed
pub fn save_text(path: &Path, text: &str) -> Result<(), StorageError> {
    let write_err = |source: std::io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, text).map_err(write_err)?;

    tracing::info!("Saved {} ({} bytes)", path.display(), text.len());
    Ok(())
}
