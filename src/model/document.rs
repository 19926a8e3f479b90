//! Document model - the arena that owns every text unit
//!
//! Units live in a slab and refer to each other by slot. Public addressing
//! goes through [`UnitId`], resolved by a side map that is kept in sync on
//! every insertion and detachment. Detaching a unit drops its whole subtree.

use std::collections::HashMap;
use std::fmt;

use slab::Slab;

use super::unit::{TextUnit, UnitId, UnitKind};
use crate::observe::{DocumentEvent, Observer};
use crate::traversal;

/// An editable document: a five-level tree of text units
pub struct Document {
    pub(crate) nodes: Slab<TextUnit>,
    pub(crate) index: HashMap<UnitId, usize>,
    pub(crate) root: usize,
    /// Letter currently under the cursor
    pub(crate) cursor: Option<UnitId>,
    observer: Option<Observer>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("units", &self.nodes.len())
            .field("root", &self.root_id())
            .field("cursor", &self.cursor)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Document {
    /// Create a document holding only an empty root
    pub fn new() -> Self {
        let mut nodes = Slab::new();
        let root_unit = TextUnit::new(UnitKind::Root, None);
        let root_id = root_unit.id;
        let root = nodes.insert(root_unit);

        let mut index = HashMap::new();
        index.insert(root_id, root);

        Self {
            nodes,
            index,
            root,
            cursor: None,
            observer: None,
        }
    }

    /// Build a document from raw text (see [`super::builder::build`])
    pub fn from_text(text: &str) -> Self {
        super::builder::build(text)
    }

    /// Build a document with `observer` attached from the start
    pub fn from_text_observed(text: &str, observer: Observer) -> Self {
        super::builder::build_observed(text, observer)
    }

    pub fn root(&self) -> &TextUnit {
        &self.nodes[self.root]
    }

    pub fn root_id(&self) -> UnitId {
        self.root().id
    }

    /// Look up a unit by id
    pub fn get(&self, id: UnitId) -> Option<&TextUnit> {
        self.index.get(&id).and_then(|&slot| self.nodes.get(slot))
    }

    pub(crate) fn get_mut(&mut self, id: UnitId) -> Option<&mut TextUnit> {
        let slot = *self.index.get(&id)?;
        self.nodes.get_mut(slot)
    }

    pub(crate) fn slot_of(&self, id: UnitId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn unit_at(&self, slot: usize) -> &TextUnit {
        &self.nodes[slot]
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of units in the tree, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no paragraphs
    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    /// Owning parent of a unit
    pub fn parent(&self, id: UnitId) -> Option<&TextUnit> {
        let parent = self.get(id)?.parent?;
        self.nodes.get(parent)
    }

    /// Children of a unit in document order (empty for unknown ids)
    pub fn children(&self, id: UnitId) -> impl Iterator<Item = &TextUnit> + '_ {
        self.get(id)
            .into_iter()
            .flat_map(move |unit| unit.children.iter().map(move |&slot| &self.nodes[slot]))
    }

    /// Synthesized text of the whole document
    pub fn text(&self) -> String {
        self.text_of(self.root_id()).unwrap_or_default()
    }

    /// Synthesized text of any unit, joined by the level rules
    pub fn text_of(&self, id: UnitId) -> Option<String> {
        if !self.contains(id) {
            return None;
        }
        let text = traversal::spans_from(self, id).fold(String::new(), |mut out, span| {
            out.push_str(span.separator);
            if let Some(ch) = span.unit.letter() {
                out.push(ch);
            }
            out
        });
        Some(text)
    }

    /// Install the observer callback, replacing any previous one
    pub fn set_observer(&mut self, observer: Observer) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub(crate) fn emit(&self, event: DocumentEvent) {
        if let Some(observer) = &self.observer {
            observer(&event);
        }
    }

    /// Append a new child under `parent`.
    ///
    /// Returns None when the child's level is not the one the parent's level
    /// admits, which keeps the tree at its fixed depth.
    pub(crate) fn append_child(&mut self, parent: usize, kind: UnitKind) -> Option<usize> {
        let parent_level = self.nodes.get(parent)?.level();
        if parent_level.child_level() != Some(kind.level()) {
            tracing::warn!(
                parent = parent_level.label(),
                child = kind.level().label(),
                "rejected child at wrong level"
            );
            return None;
        }

        let unit = TextUnit::new(kind, Some(parent));
        let id = unit.id;
        let slot = self.nodes.insert(unit);
        self.index.insert(id, slot);
        self.nodes[parent].children.push(slot);
        Some(slot)
    }

    /// Detach and drop every child subtree of `parent`
    pub(crate) fn detach_children(&mut self, parent: usize) -> usize {
        let Some(unit) = self.nodes.get_mut(parent) else {
            return 0;
        };
        let mut stack = std::mem::take(&mut unit.children);
        let mut removed = 0;

        while let Some(slot) = stack.pop() {
            let unit = self.nodes.remove(slot);
            self.index.remove(&unit.id);
            if self.cursor == Some(unit.id) {
                self.cursor = None;
            }
            stack.extend(unit.children);
            removed += 1;
        }

        removed
    }
}
