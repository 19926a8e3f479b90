//! Folio - a composite document model
//!
//! Text is split into a fixed five-level tree (root, paragraphs, sentences,
//! words, letters). Every tree-wide operation is a pass over one pre-order
//! traversal: text synthesis, cursor and highlight marks, scanning,
//! find/replace and counts. Pagination works on the synthesized text and
//! feeds print preview, printing and export.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editor;
pub mod export;
pub mod marks;
pub mod model;
pub mod observe;
pub mod paginate;
pub mod print;
pub mod replace;
pub mod scan;
pub mod stats;
pub mod storage;
pub mod tracing;
pub mod traversal;

// Re-export commonly used types
pub use config::FolioConfig;
pub use editor::Session;
pub use model::{build, build_observed, rebuild_word, Document, TextUnit, UnitId};
pub use paginate::{paginate, select_pages};
pub use scan::{find_matches, scan, validate, HighlightToken, ScanReport, SyntaxError};
pub use traversal::traverse;
