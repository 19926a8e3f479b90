//! Export adapters
//!
//! Adapters only need the synthesized text or the node listing produced by
//! a traversal. Format names without a handler fail the whole call.

use std::str::FromStr;

use thiserror::Error;

use crate::model::Document;
use crate::traversal::traverse;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Registered export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
    Pdf,
}

impl ExportFormat {
    /// File extension for exported files
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render a document in the given format
pub fn export(doc: &Document, format: ExportFormat) -> Result<String, ExportError> {
    let output = match format {
        ExportFormat::Text => doc.text(),
        ExportFormat::Json => {
            let texts: Vec<String> = traverse(doc)
                .map(|unit| doc.text_of(unit.id()).unwrap_or_default())
                .collect();
            serde_json::to_string_pretty(&texts)?
        }
        ExportFormat::Pdf => format!("%PDF-1.4\n{}\n%%EOF\n", doc.text()),
    };

    tracing::debug!(?format, bytes = output.len(), "exported document");
    Ok(output)
}

/// Parse a format name and export
pub fn export_named(doc: &Document, format: &str) -> Result<String, ExportError> {
    export(doc, format.parse()?)
}
