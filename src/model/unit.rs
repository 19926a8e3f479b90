//! Text units - the nodes of the composite document tree
//!
//! Every unit is one of five fixed levels (root, paragraph, sentence, word,
//! letter). Units only know their own data and the arena slots of their
//! parent and children; text is always synthesized through the
//! [`Document`](super::Document) that owns them.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Process-wide id source. Ids are never reused, even after a unit is
/// detached from its document.
static NEXT_UNIT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier of a text unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(u64);

impl UnitId {
    /// Allocate a fresh id
    pub(crate) fn next() -> Self {
        Self(NEXT_UNIT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value (used by the CLI and for display)
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for UnitId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree level of a unit. The depth of the tree is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Root,
    Paragraph,
    Sentence,
    Word,
    Letter,
}

impl Level {
    /// The only level a child of this level may have
    pub fn child_level(self) -> Option<Level> {
        match self {
            Level::Root => Some(Level::Paragraph),
            Level::Paragraph => Some(Level::Sentence),
            Level::Sentence => Some(Level::Word),
            Level::Word => Some(Level::Letter),
            Level::Letter => None,
        }
    }

    /// Join string placed between the synthesized text of two children
    pub fn separator(self) -> &'static str {
        match self {
            Level::Root => "\n\n",
            Level::Paragraph | Level::Sentence => " ",
            Level::Word | Level::Letter => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Root => "root",
            Level::Paragraph => "paragraph",
            Level::Sentence => "sentence",
            Level::Word => "word",
            Level::Letter => "letter",
        }
    }
}

/// Variant data carried by a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitKind {
    Root,
    Paragraph,
    Sentence,
    Word {
        highlighted: bool,
    },
    Letter {
        ch: char,
        highlighted: bool,
        has_cursor: bool,
    },
}

impl UnitKind {
    pub fn word() -> Self {
        UnitKind::Word { highlighted: false }
    }

    pub fn letter(ch: char) -> Self {
        UnitKind::Letter {
            ch,
            highlighted: false,
            has_cursor: false,
        }
    }

    pub fn level(&self) -> Level {
        match self {
            UnitKind::Root => Level::Root,
            UnitKind::Paragraph => Level::Paragraph,
            UnitKind::Sentence => Level::Sentence,
            UnitKind::Word { .. } => Level::Word,
            UnitKind::Letter { .. } => Level::Letter,
        }
    }
}

/// A node in the document arena
#[derive(Debug, Clone)]
pub struct TextUnit {
    pub(crate) id: UnitId,
    pub(crate) kind: UnitKind,
    /// Arena slot of the owning parent (None for the root)
    pub(crate) parent: Option<usize>,
    /// Arena slots of the children, in document order
    pub(crate) children: Vec<usize>,
}

impl TextUnit {
    pub(crate) fn new(kind: UnitKind, parent: Option<usize>) -> Self {
        Self {
            id: UnitId::next(),
            kind,
            parent,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn kind(&self) -> &UnitKind {
        &self.kind
    }

    pub fn level(&self) -> Level {
        self.kind.level()
    }

    pub fn is_word(&self) -> bool {
        matches!(self.kind, UnitKind::Word { .. })
    }

    pub fn is_letter(&self) -> bool {
        matches!(self.kind, UnitKind::Letter { .. })
    }

    /// Character held by a letter
    pub fn letter(&self) -> Option<char> {
        match self.kind {
            UnitKind::Letter { ch, .. } => Some(ch),
            _ => None,
        }
    }

    /// Highlight flag (always false for structural levels)
    pub fn is_highlighted(&self) -> bool {
        match self.kind {
            UnitKind::Word { highlighted } | UnitKind::Letter { highlighted, .. } => highlighted,
            _ => false,
        }
    }

    /// Cursor flag (only letters can carry the cursor)
    pub fn has_cursor(&self) -> bool {
        matches!(
            self.kind,
            UnitKind::Letter {
                has_cursor: true,
                ..
            }
        )
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Set the highlight flag. Returns false for levels that can't be highlighted.
    pub(crate) fn set_highlighted(&mut self, value: bool) -> bool {
        match &mut self.kind {
            UnitKind::Word { highlighted } | UnitKind::Letter { highlighted, .. } => {
                *highlighted = value;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_cursor(&mut self, value: bool) -> bool {
        match &mut self.kind {
            UnitKind::Letter { has_cursor, .. } => {
                *has_cursor = value;
                true
            }
            _ => false,
        }
    }
}
