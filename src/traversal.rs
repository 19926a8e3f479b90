//! Depth-first, pre-order traversal of the document tree
//!
//! This is the only way the rest of the crate iterates units. Every
//! iterator owns its own stack, so traversals can be restarted and run side
//! by side without sharing state.

use crate::model::{Document, TextUnit, UnitId};

/// Pre-order iterator over the units of a (sub)tree
pub struct Traverser<'a> {
    doc: &'a Document,
    stack: Vec<usize>,
}

impl<'a> Traverser<'a> {
    fn new(doc: &'a Document, start: Option<usize>) -> Self {
        Self {
            doc,
            stack: start.into_iter().collect(),
        }
    }

    fn next_with_slot(&mut self) -> Option<(usize, &'a TextUnit)> {
        let slot = self.stack.pop()?;
        let unit = self.doc.unit_at(slot);
        // Reversed so the leftmost child is popped first
        self.stack.extend(unit.children.iter().rev());
        Some((slot, unit))
    }
}

impl<'a> Iterator for Traverser<'a> {
    type Item = &'a TextUnit;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_slot().map(|(_, unit)| unit)
    }
}

/// Walk the whole document, root first
pub fn traverse(doc: &Document) -> Traverser<'_> {
    Traverser::new(doc, Some(doc.root))
}

/// Walk the subtree rooted at `id` (empty if the id is unknown)
pub fn traverse_from(doc: &Document, id: UnitId) -> Traverser<'_> {
    Traverser::new(doc, doc.slot_of(id))
}

/// Materialized id list, for passes that mutate the tree afterwards
pub fn traverse_ids(doc: &Document) -> Vec<UnitId> {
    traverse(doc).map(TextUnit::id).collect()
}

/// A unit together with its position in the synthesized text
#[derive(Debug, Clone, Copy)]
pub struct Span<'a> {
    pub unit: &'a TextUnit,
    /// Character offset where the unit's text starts
    pub offset: usize,
    /// Join string emitted between the previous sibling and this unit
    pub separator: &'static str,
}

/// Traversal that tracks the running character offset.
///
/// Offsets are recomputed on every pass; nothing is stored on the units.
pub struct Spans<'a> {
    inner: Traverser<'a>,
    start: Option<usize>,
    offset: usize,
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, unit) = self.inner.next_with_slot()?;

        let mut separator = "";
        if Some(slot) != self.start {
            if let Some(parent) = unit.parent {
                let parent = self.inner.doc.unit_at(parent);
                if parent.children.first() != Some(&slot) {
                    separator = parent.level().separator();
                }
            }
        }
        self.offset += separator.chars().count();

        let span = Span {
            unit,
            offset: self.offset,
            separator,
        };
        if unit.is_letter() {
            self.offset += 1;
        }
        Some(span)
    }
}

/// Walk the whole document with offsets into `doc.text()`
pub fn spans(doc: &Document) -> Spans<'_> {
    Spans {
        inner: traverse(doc),
        start: Some(doc.root),
        offset: 0,
    }
}

/// Walk a subtree with offsets relative to the subtree's own text
pub fn spans_from(doc: &Document, id: UnitId) -> Spans<'_> {
    let start = doc.slot_of(id);
    Spans {
        inner: Traverser::new(doc, start),
        start,
        offset: 0,
    }
}
