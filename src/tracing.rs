//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=folio::scan=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/folio/logs/folio.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{Document, TextUnit};
use crate::observe::{DocumentEvent, Observer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/folio/logs/folio.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "folio.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Observer that forwards document events to tracing
pub fn event_logger() -> Observer {
    Box::new(|event: &DocumentEvent| {
        tracing::debug!(target: "folio::events", ?event);
    })
}

/// Lightweight snapshot of cursor/highlight marks for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSnapshot {
    pub cursor: Option<u64>,
    pub highlighted: Vec<u64>,
}

impl MarkSnapshot {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            cursor: doc.cursor().map(|id| id.as_u64()),
            highlighted: doc
                .highlighted()
                .into_iter()
                .map(|id| id.as_u64())
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &MarkSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.cursor != other.cursor {
            let show = |c: Option<u64>| c.map_or("none".to_string(), |id| format!("#{}", id));
            let moved = format!("cursor: {} → {}", show(self.cursor), show(other.cursor));
            changes.push(moved);
        }

        let added = other
            .highlighted
            .iter()
            .filter(|id| !self.highlighted.contains(id))
            .count();
        let removed = self
            .highlighted
            .iter()
            .filter(|id| !other.highlighted.contains(id))
            .count();
        if added > 0 || removed > 0 {
            changes.push(format!("highlights: +{} -{}", added, removed));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

/// One-line description of a unit for debug output
pub fn describe(doc: &Document, unit: &TextUnit) -> String {
    format!(
        "{} {} {:?}",
        unit.level().label(),
        unit.id(),
        doc.text_of(unit.id()).unwrap_or_default()
    )
}
