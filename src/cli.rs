//! Command-line argument parsing
//!
//! Supports:
//! - Showing, scanning and validating a document
//! - Find and find/replace
//! - Export to text, JSON or PDF-wrapped text
//! - Print preview and printing with page ranges

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::print::{Orientation, PrintSettings};

/// A composite document tool
#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "A composite document tool")]
pub struct CliArgs {
    /// Text file to open
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Config file (defaults to ~/.config/folio/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the synthesized document text
    Show,
    /// Print the unit tree in traversal order
    Tree,
    /// Print classification tokens and validation errors
    Scan,
    /// Print validation errors only (exit code 1 when any are found)
    Validate,
    /// Find words containing a pattern (case-insensitive)
    Find { pattern: String },
    /// Replace words and write the result
    Replace {
        pattern: String,
        replacement: String,
        /// Replace inside words instead of whole words only
        #[arg(long)]
        partial: bool,
        /// Write to this file instead of overwriting the input
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Export the document
    Export {
        /// Format name: text, json or pdf
        #[arg(short, long, default_value = "text")]
        format: String,
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the document (or show a preview)
    Print(PrintArgs),
    /// Show unit counts
    Stats,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct PrintArgs {
    /// Printer name
    #[arg(long)]
    pub printer: Option<String>,
    /// Number of copies
    #[arg(long)]
    pub copies: Option<u32>,
    /// Page range, e.g. "1,3-5"
    #[arg(long, value_name = "RANGE")]
    pub pages: Option<String>,
    /// Print both sides
    #[arg(long)]
    pub duplex: bool,
    #[arg(long, value_enum)]
    pub orientation: Option<Orientation>,
    /// Characters per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,
    /// Show a preview instead of printing
    #[arg(long)]
    pub preview: bool,
}

impl PrintArgs {
    /// Overlay the command-line flags on configured defaults
    pub fn settings(&self, defaults: &PrintSettings) -> PrintSettings {
        PrintSettings {
            printer_name: self
                .printer
                .clone()
                .unwrap_or_else(|| defaults.printer_name.clone()),
            copies: self.copies.unwrap_or(defaults.copies),
            page_range: self
                .pages
                .clone()
                .unwrap_or_else(|| defaults.page_range.clone()),
            duplex: self.duplex || defaults.duplex,
            orientation: self.orientation.unwrap_or(defaults.orientation),
        }
    }
}
