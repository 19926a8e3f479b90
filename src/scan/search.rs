//! Case-insensitive pattern search over words
//!
//! Offsets advance by the word length plus one separator between words,
//! whatever join actually sits between them. Paragraph breaks therefore
//! drift from `Document::text()`; consumers rely on this model.

use super::{HighlightToken, TokenKind};
use crate::model::Document;
use crate::traversal::traverse;

/// Emit a match token for every word containing `pattern`
pub fn find_matches(doc: &Document, pattern: &str) -> Vec<HighlightToken> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = pattern.chars().collect();
    let mut offset = 0;
    let mut matches = Vec::new();

    for word in traverse(doc).filter(|unit| unit.is_word()) {
        let text = doc.text_of(word.id()).unwrap_or_default();
        let letters: Vec<char> = text.chars().collect();

        if let Some(in_word) = find_ignore_case(&letters, &needle) {
            matches.push(HighlightToken {
                element_id: word.id(),
                kind: TokenKind::Match,
                start: offset + in_word,
                length: needle.len(),
            });
        }

        offset += letters.len() + 1;
    }

    tracing::debug!(pattern, matches = matches.len(), "pattern search");
    matches
}

/// Char index of the first case-insensitive occurrence of `needle`
fn find_ignore_case(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    (0..haystack.len()).find(|&at| matches_at(haystack, needle, at))
}

/// Whether `needle` sits at char index `at`, compared char by char so
/// case folding never shifts positions
pub(crate) fn matches_at(haystack: &[char], needle: &[char], at: usize) -> bool {
    let Some(window) = haystack.get(at..at + needle.len()) else {
        return false;
    };
    window
        .iter()
        .zip(needle)
        .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}
