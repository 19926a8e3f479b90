//! Editor session - the orchestration layer over the document core
//!
//! A session owns one document, the active configuration and the path the
//! text came from. It's what the CLI drives.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::FolioConfig;
use crate::export::{export_named, ExportFormat};
use crate::model::{Document, UnitId};
use crate::observe::Observer;
use crate::paginate::paginate;
use crate::print::{self, PrintEvent, PrintSettings};
use crate::replace::{replace_in_words, replace_words};
use crate::scan::{find_matches, HighlightToken, ScanReport};
use crate::stats::DocumentStats;
use crate::storage;

#[derive(Debug)]
pub struct Session {
    pub document: Document,
    pub config: FolioConfig,
    pub path: Option<PathBuf>,
}

impl Session {
    /// Start a session from in-memory text
    pub fn from_text(text: &str, config: FolioConfig) -> Self {
        Self {
            document: Document::from_text(text),
            config,
            path: None,
        }
    }

    /// Load a file and build its document
    pub fn open(path: &Path, config: FolioConfig) -> Result<Self> {
        let text = storage::load_text(path)?;
        Ok(Self {
            document: Document::from_text(&text),
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load a file with `observer` watching the document from its first build
    pub fn open_observed(path: &Path, config: FolioConfig, observer: Observer) -> Result<Self> {
        let text = storage::load_text(path)?;
        Ok(Self {
            document: Document::from_text_observed(&text, observer),
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Write the synthesized text back, to `target` or the source path
    pub fn save(&self, target: Option<&Path>) -> Result<PathBuf> {
        let path = target
            .map(Path::to_path_buf)
            .or_else(|| self.path.clone())
            .context("No path to save to")?;
        storage::save_text(&path, &self.document.text())?;
        Ok(path)
    }

    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Scan with the configured denylist
    pub fn scan(&self) -> ScanReport {
        self.config.scanner().scan(&self.document)
    }

    /// Find words containing `pattern` and highlight them
    pub fn find(&mut self, pattern: &str) -> Vec<HighlightToken> {
        let matches = find_matches(&self.document, pattern);
        self.document.clear_highlights();
        for token in &matches {
            self.document.highlight(token.element_id);
        }
        matches
    }

    /// Replace words; `whole_word` picks exact word matching over substring
    pub fn replace(&mut self, pattern: &str, replacement: &str, whole_word: bool) -> usize {
        if whole_word {
            replace_words(&mut self.document, pattern, replacement)
        } else {
            replace_in_words(&mut self.document, pattern, replacement)
        }
    }

    pub fn move_cursor(&mut self, id: UnitId) -> bool {
        self.document.move_cursor_to(id)
    }

    /// Export in a named format
    pub fn export(&self, format: &str) -> Result<String> {
        export_named(&self.document, format)
            .with_context(|| format!("Failed to export as '{}'", format))
    }

    /// Export to a file, deriving the file name from the source when needed
    pub fn export_to(&self, format: &str, target: Option<&Path>) -> Result<PathBuf> {
        let extension = format.parse::<ExportFormat>()?.extension();
        let content = self.export(format)?;
        let path = match (target, &self.path) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(source)) => source.with_extension(extension),
            (None, None) => PathBuf::from(format!("document.{}", extension)),
        };
        storage::save_text(&path, &content)?;
        Ok(path)
    }

    /// Pages of the synthesized text at `page_size` (or the configured size)
    pub fn pages(&self, page_size: Option<usize>) -> Result<Vec<String>> {
        let size = page_size.unwrap_or(self.config.page_size);
        paginate(&self.document.text(), size).context("Failed to paginate document")
    }

    pub fn preview(&self, settings: &PrintSettings, page_size: Option<usize>) -> Result<String> {
        Ok(print::preview(&self.pages(page_size)?, settings))
    }

    pub fn print(
        &self,
        settings: &PrintSettings,
        page_size: Option<usize>,
    ) -> Result<Vec<PrintEvent>> {
        Ok(print::print_job(&self.pages(page_size)?, settings))
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.document)
    }
}
