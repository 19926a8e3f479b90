//! Scanner - classification tokens and validation errors
//!
//! One traversal produces both result lists. Bracket matching then runs as
//! a second linear pass over the synthesized text. Errors are collected,
//! never raised, so one bad token does not hide the next.

mod classify;
mod delimiters;
mod search;

pub use classify::classify;
pub use delimiters::check_delimiters;
pub use search::find_matches;
pub(crate) use search::matches_at;

use serde::Serialize;

use crate::model::{Document, UnitId};
use crate::observe::DocumentEvent;
use crate::traversal::spans;

/// Characters reported as unexpected when no denylist is configured
pub const DEFAULT_DENYLIST: &[char] = &['@'];

/// Classification of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Number,
    Constant,
    Identifier,
    Match,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Constant => "CONSTANT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Match => "MATCH",
        }
    }
}

/// A classified span of the document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightToken {
    pub element_id: UnitId,
    pub kind: TokenKind,
    /// Character offset of the span
    pub start: usize,
    /// Length in characters
    pub length: usize,
}

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unmatched delimiters
    Structural,
    /// Unexpected symbols and empty words
    Lexical,
}

/// A validation finding at a character offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    pub position: usize,
    pub message: String,
    pub kind: ErrorKind,
}

impl SyntaxError {
    pub fn structural(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
            kind: ErrorKind::Structural,
        }
    }

    pub fn lexical(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
            kind: ErrorKind::Lexical,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, self.position)
    }
}

/// Result of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub tokens: Vec<HighlightToken>,
    pub errors: Vec<SyntaxError>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Highlighter and validator. Holds only configuration, no scan state.
#[derive(Debug, Clone)]
pub struct Scanner {
    denylist: Vec<char>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST.to_vec())
    }
}

impl Scanner {
    pub fn new(denylist: Vec<char>) -> Self {
        Self { denylist }
    }

    pub fn denylist(&self) -> &[char] {
        &self.denylist
    }

    /// Classify every word and validate the whole document
    pub fn scan(&self, doc: &Document) -> ScanReport {
        let mut report = ScanReport::default();

        for span in spans(doc) {
            let unit = span.unit;

            if unit.is_word() {
                let text = doc.text_of(unit.id()).unwrap_or_default();
                let Some(kind) = classify(&text) else {
                    let error = SyntaxError::lexical(span.offset, "empty word");
                    report.errors.push(error);
                    continue;
                };
                report.tokens.push(HighlightToken {
                    element_id: unit.id(),
                    kind,
                    start: span.offset,
                    length: text.chars().count(),
                });
            } else if let Some(ch) = unit.letter() {
                if self.denylist.contains(&ch) {
                    tracing::trace!(offset = span.offset, %ch, "unexpected symbol");
                    let message = format!("unexpected symbol '{}'", ch);
                    report.errors.push(SyntaxError::lexical(span.offset, message));
                }
            }
        }

        report.errors.extend(check_delimiters(&doc.text()));

        tracing::debug!(
            tokens = report.tokens.len(),
            errors = report.errors.len(),
            "scan finished"
        );
        doc.emit(DocumentEvent::Scanned {
            tokens: report.tokens.len(),
            errors: report.errors.len(),
        });
        report
    }

    /// Only the validation errors of a scan
    pub fn validate(&self, doc: &Document) -> Vec<SyntaxError> {
        self.scan(doc).errors
    }
}

/// Scan with the default denylist
pub fn scan(doc: &Document) -> ScanReport {
    Scanner::default().scan(doc)
}

/// Validate with the default denylist
pub fn validate(doc: &Document) -> Vec<SyntaxError> {
    Scanner::default().validate(doc)
}
