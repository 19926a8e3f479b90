//! Find/replace over words
//!
//! Matching words are collected in one traversal, then each is rebuilt in
//! place so ancestors keep their shape.

use crate::model::{rebuild_word, Document, UnitId};
use crate::scan::matches_at;
use crate::traversal::traverse;

/// Replace every word whose text equals `pattern` (case-sensitive).
///
/// Returns the number of words rebuilt.
pub fn replace_words(doc: &mut Document, pattern: &str, replacement: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }

    let targets: Vec<UnitId> = traverse(doc)
        .filter(|unit| unit.is_word())
        .filter(|unit| doc.text_of(unit.id()).as_deref() == Some(pattern))
        .map(|unit| unit.id())
        .collect();

    let count = targets
        .into_iter()
        .filter(|&word| rebuild_word(doc, word, replacement))
        .count();
    tracing::debug!(pattern, replacement, count, "replaced whole words");
    count
}

/// Replace `pattern` inside words, matching case-insensitively like search.
///
/// Every occurrence in an affected word is replaced. Returns the number of
/// words rebuilt.
pub fn replace_in_words(doc: &mut Document, pattern: &str, replacement: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }

    let needle: Vec<char> = pattern.chars().collect();
    let edits: Vec<(UnitId, String)> = traverse(doc)
        .filter(|unit| unit.is_word())
        .filter_map(|unit| {
            let text = doc.text_of(unit.id())?;
            let replaced = replace_case_insensitive(&text, &needle, replacement)?;
            Some((unit.id(), replaced))
        })
        .collect();

    let count = edits
        .into_iter()
        .filter(|(word, text)| rebuild_word(doc, *word, text))
        .count();
    tracing::debug!(pattern, replacement, count, "replaced inside words");
    count
}

/// Replace all case-insensitive occurrences of `needle`.
/// Returns None when nothing matched.
fn replace_case_insensitive(text: &str, needle: &[char], replacement: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    let mut matched = false;

    while i < chars.len() {
        if matches_at(&chars, needle, i) {
            out.push_str(replacement);
            i += needle.len();
            matched = true;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    matched.then_some(out)
}
