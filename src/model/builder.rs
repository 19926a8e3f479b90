//! Composite builder - splits raw text into the document tree
//!
//! The split is purely structural:
//! - paragraphs are separated by one or more blank lines
//! - sentences end at `.`, `!` or `?` (terminators are consumed)
//! - words are separated by whitespace
//! - every character of a word becomes a letter
//!
//! Empty spans are discarded at every level.

use super::document::Document;
use super::unit::{UnitId, UnitKind};
use crate::observe::{DocumentEvent, Observer};

/// Characters that end a sentence
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Build a document tree from raw text
pub fn build(text: &str) -> Document {
    fill_document(Document::new(), text)
}

/// Build with `observer` installed before any unit is added, so it also
/// receives the [`DocumentEvent::Built`] event
pub fn build_observed(text: &str, observer: Observer) -> Document {
    let mut doc = Document::new();
    doc.set_observer(observer);
    fill_document(doc, text)
}

fn fill_document(mut doc: Document, text: &str) -> Document {
    let root = doc.root;

    for paragraph_text in split_paragraphs(text) {
        let sentences: Vec<&str> = split_sentences(&paragraph_text).collect();
        if sentences.is_empty() {
            continue;
        }

        let Some(paragraph) = doc.append_child(root, UnitKind::Paragraph) else {
            continue;
        };
        for sentence_text in sentences {
            let Some(sentence) = doc.append_child(paragraph, UnitKind::Sentence) else {
                continue;
            };
            for word_text in sentence_text.split_whitespace() {
                if let Some(word) = doc.append_child(sentence, UnitKind::word()) {
                    fill_letters(&mut doc, word, word_text);
                }
            }
        }
    }

    tracing::debug!(
        units = doc.len(),
        paragraphs = doc.root().child_count(),
        "built document"
    );
    doc.emit(DocumentEvent::Built { units: doc.len() });
    doc
}

/// Replace a word's letters with the characters of `text`.
///
/// The word keeps its id and its position in the parent sentence. Returns
/// false (and changes nothing) when `word` does not name a word.
pub fn rebuild_word(doc: &mut Document, word: UnitId, text: &str) -> bool {
    let Some(slot) = doc.slot_of(word) else {
        tracing::trace!(%word, "rebuild skipped: unknown id");
        return false;
    };
    if !doc.unit_at(slot).is_word() {
        tracing::trace!(%word, "rebuild skipped: not a word");
        return false;
    }

    let removed = doc.detach_children(slot);
    let letters = fill_letters(doc, slot, text);

    tracing::debug!(%word, removed, letters, "rebuilt word");
    doc.emit(DocumentEvent::WordRebuilt { word, letters });
    true
}

fn fill_letters(doc: &mut Document, word: usize, text: &str) -> usize {
    text.chars()
        .filter_map(|ch| doc.append_child(word, UnitKind::letter(ch)))
        .count()
}

/// Split text into paragraph spans at blank (whitespace-only) lines
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            current.clear();
            continue;
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.trim().is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

fn split_sentences(paragraph: &str) -> impl Iterator<Item = &str> {
    paragraph
        .split(SENTENCE_TERMINATORS)
        .filter(|span| !span.trim().is_empty())
}
