//! Document model - the composite tree of text units
//!
//! Root > Paragraph > Sentence > Word > Letter. Units are owned by a
//! [`Document`] arena and addressed by their stable [`UnitId`].

pub mod builder;
pub mod document;
pub mod unit;

pub use builder::{build, build_observed, rebuild_word, SENTENCE_TERMINATORS};
pub use document::Document;
pub use unit::{Level, TextUnit, UnitId, UnitKind};
