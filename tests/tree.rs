//! Document tree tests
//!
//! Building, traversal order, text synthesis, rebuilds and marks.

mod common;

use common::{cursor_count, letters, normalize, word_named, word_texts, words};
use folio::model::{build, build_observed, rebuild_word, Document, Level, TextUnit, UnitId};
use folio::observe::DocumentEvent;
use folio::traversal::{traverse, traverse_from, traverse_ids};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

// ========================================================================
// Building and text synthesis
// ========================================================================

#[test]
fn test_empty_input_gives_empty_root() {
    let doc = build("");
    assert_eq!(doc.text(), "");
    assert_eq!(doc.root().child_count(), 0);
    assert_eq!(traverse(&doc).count(), 1);
}

#[test]
fn test_round_trip_up_to_whitespace() {
    let samples = [
        "Hello world.",
        "One  two   three! Four?\n\nFive six.",
        "  leading and trailing  \n\n\n\n second paragraph ",
        "no terminator at all",
        "Line one\nline two\n\nThird",
    ];
    for text in samples {
        assert_eq!(build(text).text(), normalize(text), "input {:?}", text);
    }
}

#[test]
fn test_join_rules_per_level() {
    let doc = build("ab cd. ef\n\ngh");
    let paragraph = doc.children(doc.root_id()).next().unwrap().id();
    let sentences: Vec<UnitId> = doc.children(paragraph).map(TextUnit::id).collect();

    assert_eq!(doc.text_of(sentences[0]).unwrap(), "ab cd");
    assert_eq!(doc.text_of(paragraph).unwrap(), "ab cd ef");
    assert_eq!(doc.text(), "ab cd ef\n\ngh");
    assert_eq!(doc.text_of(word_named(&doc, "cd")).unwrap(), "cd");
}

#[test]
fn test_depth_is_fixed() {
    let doc = build("Deep enough. Yes!\n\nMore");
    for unit in traverse(&doc) {
        let ancestors = std::iter::successors(doc.parent(unit.id()), |p| doc.parent(p.id()));
        let depth = ancestors.count();
        let expected = match unit.level() {
            Level::Root => 0,
            Level::Paragraph => 1,
            Level::Sentence => 2,
            Level::Word => 3,
            Level::Letter => 4,
        };
        assert_eq!(depth, expected);
    }
}

// ========================================================================
// Traversal
// ========================================================================

#[test]
fn test_traversal_visits_each_unit_once_parent_first() {
    let doc = build("The quick fox. Jumps!\n\nOver the dog");
    let order = traverse_ids(&doc);

    let unique: HashSet<&UnitId> = order.iter().collect();
    assert_eq!(unique.len(), order.len());
    assert_eq!(order.len(), doc.len());

    let position = |id: UnitId| order.iter().position(|&x| x == id).unwrap();
    for unit in traverse(&doc) {
        if let Some(parent) = doc.parent(unit.id()) {
            assert!(position(parent.id()) < position(unit.id()));
        }
        let children: Vec<usize> = doc.children(unit.id()).map(|c| position(c.id())).collect();
        assert!(children.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_subtree_traversal() {
    let doc = build("alpha beta");
    let beta = word_named(&doc, "beta");
    let letters: String = traverse_from(&doc, beta)
        .filter_map(TextUnit::letter)
        .collect();
    assert_eq!(letters, "beta");
}

// ========================================================================
// Rebuilding words
// ========================================================================

#[test]
fn test_rebuild_word_drops_old_letters() {
    let mut doc = build("cat sat");
    let cat = word_named(&doc, "cat");
    let old_letters: Vec<UnitId> = doc.children(cat).map(TextUnit::id).collect();

    assert!(rebuild_word(&mut doc, cat, "lion"));

    for id in old_letters {
        assert!(!doc.contains(id));
    }
    assert_eq!(word_texts(&doc), vec!["lion", "sat"]);
    assert_eq!(doc.text(), "lion sat");
}

#[test]
fn test_ids_never_reused_after_rebuild() {
    let mut doc = build("ab");
    let word = words(&doc)[0];
    let before: HashSet<UnitId> = traverse_ids(&doc).into_iter().collect();

    rebuild_word(&mut doc, word, "xyz");

    let fresh: Vec<UnitId> = letters(&doc);
    assert!(fresh.iter().all(|id| !before.contains(id)));
}

#[test]
fn test_rebuild_removes_cursor_on_detached_letter() {
    let mut doc = build("ab cd");
    let a = letters(&doc)[0];
    doc.move_cursor_to(a);

    let word = word_named(&doc, "ab");
    rebuild_word(&mut doc, word, "zz");

    assert_eq!(doc.cursor(), None);
    assert_eq!(cursor_count(&doc), 0);
}

// ========================================================================
// Cursor and highlights
// ========================================================================

#[test]
fn test_at_most_one_cursor_for_any_sequence() {
    let mut doc = build("some words here. And there");
    let mut targets: Vec<UnitId> = traverse_ids(&doc);
    targets.push(UnitId::from(u64::MAX));

    for i in 0..targets.len() * 3 {
        doc.move_cursor_to(targets[(i * 7) % targets.len()]);
        assert!(cursor_count(&doc) <= 1);
    }
}

#[test]
fn test_cursor_miss_is_silent() {
    let mut doc = build("abc");
    let b = letters(&doc)[1];
    assert!(doc.move_cursor_to(b));
    assert!(!doc.move_cursor_to(UnitId::from(u64::MAX)));
    assert_eq!(doc.cursor(), None);
}

#[test]
fn test_highlight_accumulates() {
    let mut doc = build("one two three");
    let ids = words(&doc);
    doc.highlight(ids[0]);
    doc.highlight(ids[2]);
    assert_eq!(doc.highlighted(), vec![ids[0], ids[2]]);
}

// ========================================================================
// Observer hook
// ========================================================================

#[test]
fn test_observer_sees_mutations() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut doc = Document::from_text("hi there");
    doc.set_observer(Box::new(move |event: &DocumentEvent| {
        sink.lock().unwrap().push(event.clone());
    }));

    let hi = word_named(&doc, "hi");
    let letter = letters(&doc)[0];
    doc.highlight(hi);
    doc.move_cursor_to(letter);
    rebuild_word(&mut doc, hi, "hey");

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            DocumentEvent::Highlighted { id: hi },
            DocumentEvent::CursorMoved { to: Some(letter) },
            DocumentEvent::WordRebuilt {
                word: hi,
                letters: 3
            },
        ]
    );
}

#[test]
fn test_observer_installed_at_build_sees_built() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut doc = build_observed(
        "A b.\n\nC",
        Box::new(move |event: &DocumentEvent| {
            sink.lock().unwrap().push(event.clone());
        }),
    );
    doc.clear_highlights();

    let units = doc.len();
    assert_eq!(units, 11);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            DocumentEvent::Built { units },
            DocumentEvent::HighlightsCleared,
        ]
    );
}
