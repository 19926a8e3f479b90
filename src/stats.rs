//! Unit counts for a document

use serde::Serialize;

use crate::model::{Document, Level};
use crate::traversal::traverse;

/// Number of units per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
    pub letters: usize,
}

impl DocumentStats {
    /// Count every level in one traversal
    pub fn collect(doc: &Document) -> Self {
        traverse(doc).fold(Self::default(), |mut stats, unit| {
            match unit.level() {
                Level::Root => {}
                Level::Paragraph => stats.paragraphs += 1,
                Level::Sentence => stats.sentences += 1,
                Level::Word => stats.words += 1,
                Level::Letter => stats.letters += 1,
            }
            stats
        })
    }
}
