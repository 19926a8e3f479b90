//! Cursor and highlight marks
//!
//! Marks are flags on words and letters, addressed by [`UnitId`]. Lookups
//! that miss are silent: the operations report whether they applied but
//! never fail.

use crate::model::{Document, UnitId};
use crate::observe::DocumentEvent;
use crate::traversal::traverse;

impl Document {
    /// Highlight a word or letter. Existing highlights are kept.
    ///
    /// Returns false when the id is unknown or names a structural unit.
    pub fn highlight(&mut self, id: UnitId) -> bool {
        let target = traverse(self)
            .find(|unit| unit.id() == id)
            .filter(|unit| unit.is_word() || unit.is_letter())
            .map(|unit| unit.id());

        let Some(target) = target else {
            tracing::trace!(%id, "highlight: no word or letter with this id");
            return false;
        };

        let applied = self
            .get_mut(target)
            .is_some_and(|unit| unit.set_highlighted(true));
        if applied {
            self.emit(DocumentEvent::Highlighted { id: target });
        }
        applied
    }

    /// Clear every highlight flag
    pub fn clear_highlights(&mut self) {
        let marked: Vec<UnitId> = traverse(self)
            .filter(|unit| unit.is_highlighted())
            .map(|unit| unit.id())
            .collect();
        for id in marked {
            if let Some(unit) = self.get_mut(id) {
                unit.set_highlighted(false);
            }
        }
        self.emit(DocumentEvent::HighlightsCleared);
    }

    /// Ids of every highlighted unit in document order
    pub fn highlighted(&self) -> Vec<UnitId> {
        traverse(self)
            .filter(|unit| unit.is_highlighted())
            .map(|unit| unit.id())
            .collect()
    }

    /// Move the cursor to a letter.
    ///
    /// The cursor flag is first cleared on every letter. If `id` does not
    /// name a letter the cursor stays unset and false is returned.
    pub fn move_cursor_to(&mut self, id: UnitId) -> bool {
        let flagged: Vec<UnitId> = traverse(self)
            .filter(|unit| unit.has_cursor())
            .map(|unit| unit.id())
            .collect();
        for letter in flagged {
            if let Some(unit) = self.get_mut(letter) {
                unit.set_cursor(false);
            }
        }
        self.cursor = None;

        let target = traverse(self)
            .find(|unit| unit.id() == id && unit.is_letter())
            .map(|unit| unit.id());

        if let Some(letter) = target {
            if let Some(unit) = self.get_mut(letter) {
                unit.set_cursor(true);
                self.cursor = Some(letter);
            }
        } else {
            tracing::trace!(%id, "cursor: no letter with this id");
        }

        self.emit(DocumentEvent::CursorMoved { to: self.cursor });
        self.cursor.is_some()
    }

    /// Letter currently under the cursor
    pub fn cursor(&self) -> Option<UnitId> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextUnit;

    fn first_word(doc: &Document) -> UnitId {
        traverse(doc)
            .find(|u| u.is_word())
            .map(TextUnit::id)
            .unwrap()
    }

    fn letters(doc: &Document) -> Vec<UnitId> {
        traverse(doc)
            .filter(|u| u.is_letter())
            .map(TextUnit::id)
            .collect()
    }

    #[test]
    fn test_highlight_word_is_additive() {
        let mut doc = Document::from_text("one two");
        let word = first_word(&doc);
        let letter = letters(&doc)[4];

        assert!(doc.highlight(word));
        assert!(doc.highlight(letter));
        assert_eq!(doc.highlighted(), vec![word, letter]);
    }

    #[test]
    fn test_highlight_ignores_structural_units() {
        let mut doc = Document::from_text("one two");
        let root = doc.root_id();
        assert!(!doc.highlight(root));
        assert!(!doc.highlight(UnitId::from(u64::MAX)));
        assert!(doc.highlighted().is_empty());
    }

    #[test]
    fn test_clear_highlights() {
        let mut doc = Document::from_text("one two");
        let word = first_word(&doc);
        doc.highlight(word);
        doc.clear_highlights();
        assert!(doc.highlighted().is_empty());
    }

    #[test]
    fn test_cursor_moves_between_letters() {
        let mut doc = Document::from_text("abc");
        let ids = letters(&doc);

        assert!(doc.move_cursor_to(ids[0]));
        assert!(doc.move_cursor_to(ids[2]));

        let flagged: Vec<UnitId> = traverse(&doc)
            .filter(|u| u.has_cursor())
            .map(TextUnit::id)
            .collect();
        assert_eq!(flagged, vec![ids[2]]);
        assert_eq!(doc.cursor(), Some(ids[2]));
    }

    #[test]
    fn test_cursor_on_word_leaves_cursor_unset() {
        let mut doc = Document::from_text("abc");
        let ids = letters(&doc);
        doc.move_cursor_to(ids[1]);

        let word = first_word(&doc);
        assert!(!doc.move_cursor_to(word));
        assert_eq!(doc.cursor(), None);
        assert!(traverse(&doc).all(|u| !u.has_cursor()));
    }
}
