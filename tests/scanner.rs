//! Scanner tests
//!
//! Classification, validation errors and pattern search offsets.

mod common;

use common::{word_named, words};
use folio::model::{build, rebuild_word};
use folio::scan::{find_matches, scan, validate, ErrorKind, Scanner, SyntaxError, TokenKind};
use TokenKind::{Constant, Identifier, Number};

// ========================================================================
// Classification
// ========================================================================

#[test]
fn test_classification_examples() {
    let doc = build("42 ABC Abc");
    let report = scan(&doc);
    let kinds: Vec<TokenKind> = report.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [Number, Constant, Identifier]);
    assert_eq!(report.tokens[1].element_id, word_named(&doc, "ABC"));
    assert_eq!(report.tokens[1].start, 3);
    assert_eq!(report.tokens[1].length, 3);
}

#[test]
fn test_whitespace_word_gets_no_token() {
    let mut doc = build("x y z");
    let y = word_named(&doc, "y");
    rebuild_word(&mut doc, y, "  ");

    let report = scan(&doc);
    assert!(report.tokens.iter().all(|t| t.element_id != y));
    assert_eq!(report.tokens.len(), 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "empty word");
}

#[test]
fn test_empty_document_scans_clean() {
    let report = scan(&build(""));
    assert!(report.tokens.is_empty());
    assert!(report.is_clean());
}

// ========================================================================
// Validation
// ========================================================================

#[test]
fn test_extra_closing_paren() {
    let errors = validate(&build("(a)(b))"));
    let expected = SyntaxError::structural(6, "unmatched closing ')'");
    assert_eq!(errors, vec![expected]);
}

#[test]
fn test_unclosed_paren() {
    let errors = validate(&build("(a"));
    let expected = SyntaxError::structural(0, "unmatched opening '('");
    assert_eq!(errors, vec![expected]);
}

#[test]
fn test_unclosed_parens_reported_most_recent_first() {
    let errors = validate(&build("(one (two (three"));
    let positions: Vec<usize> = errors.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![10, 5, 0]);
}

#[test]
fn test_delimiters_checked_across_paragraphs() {
    // "(open\n\nclose)"
    let errors = validate(&build("(open\n\nclose)"));
    assert!(errors.is_empty());
}

#[test]
fn test_symbol_positions_in_full_text() {
    let doc = build("first para.\n\nsecond @here");
    let errors = validate(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Lexical);
    let text: Vec<char> = doc.text().chars().collect();
    assert_eq!(text[errors[0].position], '@');
}

#[test]
fn test_scanner_without_denylist() {
    let doc = build("user@example");
    assert!(Scanner::new(Vec::new()).validate(&doc).is_empty());
}

#[test]
fn test_scans_are_independent() {
    let doc = build("a@ (b");
    let first = scan(&doc);
    let second = scan(&doc);
    assert_eq!(first, second);
}

// ========================================================================
// Pattern search
// ========================================================================

#[test]
fn test_find_matches_offsets_advance_by_word_plus_one() {
    let doc = build("alpha beta. gamma\n\nbeta");
    let found = find_matches(&doc, "BETA");
    let starts: Vec<usize> = found.iter().map(|t| t.start).collect();
    // alpha(0) beta(6) gamma(11) beta(17)
    assert_eq!(starts, vec![6, 17]);
    assert_eq!(found[1].element_id, words(&doc)[3]);
    assert!(found.iter().all(|t| t.kind == TokenKind::Match));
}

#[test]
fn test_find_matches_no_results() {
    let doc = build("nothing to see");
    assert!(find_matches(&doc, "xyz").is_empty());
}

#[test]
fn test_find_matches_counts_original_chars() {
    // Lowercasing 'İ' yields two chars; offsets still count the original one
    let doc = build("İcat ok");
    let found = find_matches(&doc, "cat");
    assert_eq!(found[0].start, 1);
    assert_eq!(find_matches(&doc, "OK")[0].start, 5);
}
