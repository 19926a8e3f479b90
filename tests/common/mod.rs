//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use folio::model::{Document, Level, TextUnit, UnitId};
use folio::traversal::traverse;

/// Ids of every unit at `level`, in document order
pub fn ids_at(doc: &Document, level: Level) -> Vec<UnitId> {
    traverse(doc)
        .filter(|unit| unit.level() == level)
        .map(TextUnit::id)
        .collect()
}

pub fn words(doc: &Document) -> Vec<UnitId> {
    ids_at(doc, Level::Word)
}

pub fn letters(doc: &Document) -> Vec<UnitId> {
    ids_at(doc, Level::Letter)
}

/// Text of every word, in document order
pub fn word_texts(doc: &Document) -> Vec<String> {
    words(doc)
        .into_iter()
        .map(|id| doc.text_of(id).unwrap_or_default())
        .collect()
}

/// First word whose text equals `text`
pub fn word_named(doc: &Document, text: &str) -> UnitId {
    words(doc)
        .into_iter()
        .find(|&id| doc.text_of(id).as_deref() == Some(text))
        .unwrap_or_else(|| panic!("no word {:?} in document", text))
}

/// Number of letters carrying the cursor flag
pub fn cursor_count(doc: &Document) -> usize {
    traverse(doc).filter(|unit| unit.has_cursor()).count()
}

/// Normalize text the way the builder does: words joined by single spaces
/// within a paragraph, sentence terminators dropped
pub fn normalize(text: &str) -> String {
    text.split("\n\n")
        .map(|para| {
            para.split(['.', '!', '?'])
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|para| !para.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
