//! Observability hook for document operations
//!
//! A [`Document`](crate::model::Document) can carry one optional observer
//! callback. Core operations call it at fixed extension points instead of
//! logging to the console themselves; `tracing` events are emitted
//! alongside for the subscriber installed by [`crate::tracing::init`].

use crate::model::UnitId;

/// Extension points reported to an observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// A document was built from raw text
    Built { units: usize },
    /// A word's letters were regenerated from a new string
    WordRebuilt { word: UnitId, letters: usize },
    /// A word or letter was highlighted
    Highlighted { id: UnitId },
    /// All highlight flags were cleared
    HighlightsCleared,
    /// The cursor moved (None when the target was not a letter)
    CursorMoved { to: Option<UnitId> },
    /// A scan pass finished
    Scanned { tokens: usize, errors: usize },
}

/// Observer callback
pub type Observer = Box<dyn Fn(&DocumentEvent) + Send + Sync>;
