//! Print preview and the print loop
//!
//! Printer identity and orientation are not interpreted, only echoed into
//! the preview. The selected pages drive both preview and printing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::paginate::select_page_indices;

/// Page orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Settings for one print job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    pub printer_name: String,
    pub copies: u32,
    /// Page range spec, empty for all pages
    pub page_range: String,
    pub duplex: bool,
    pub orientation: Orientation,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            printer_name: "default".to_string(),
            copies: 1,
            page_range: String::new(),
            duplex: false,
            orientation: Orientation::Portrait,
        }
    }
}

/// One step of the print loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintEvent {
    /// A page sent to the printer (1-based page number)
    Page { number: usize, content: String },
    /// Back side announcement after a page in duplex mode
    Back { after: usize },
}

impl fmt::Display for PrintEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintEvent::Page { number, content } => {
                write!(f, "Printing page {}:\n{}", number, content)
            }
            PrintEvent::Back { after } => write!(f, "[Back side of page {}]", after),
        }
    }
}

/// Render a text preview of the selected pages
pub fn preview(pages: &[String], settings: &PrintSettings) -> String {
    let selected = select_page_indices(pages.len(), &settings.page_range);

    let mut out = format!(
        "Printer: {}\nCopies: {}\nOrientation: {}\nDuplex: {}\nPages: {} of {}\n",
        settings.printer_name,
        settings.copies,
        settings.orientation,
        if settings.duplex { "yes" } else { "no" },
        selected.len(),
        pages.len(),
    );

    for idx in selected {
        out.push_str(&format!("\n--- Page {} ---\n{}\n", idx + 1, pages[idx]));
    }

    out
}

/// Expand the selected pages into the print sequence for every copy
pub fn print_job(pages: &[String], settings: &PrintSettings) -> Vec<PrintEvent> {
    let selected = select_page_indices(pages.len(), &settings.page_range);
    let mut events = Vec::new();

    for copy in 0..settings.copies {
        tracing::debug!(
            printer = %settings.printer_name,
            copy = copy + 1,
            pages = selected.len(),
            "printing copy"
        );
        for &idx in &selected {
            events.push(PrintEvent::Page {
                number: idx + 1,
                content: pages[idx].clone(),
            });
            if settings.duplex {
                events.push(PrintEvent::Back { after: idx + 1 });
            }
        }
    }

    events
}
