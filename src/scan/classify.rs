//! Word classification

use super::TokenKind;

/// Classify a word's text.
///
/// Returns None for empty or whitespace-only words, which get no token.
pub fn classify(word: &str) -> Option<TokenKind> {
    if word.trim().is_empty() {
        return None;
    }

    let kind = if word.chars().all(|ch| ch.is_ascii_digit()) {
        TokenKind::Number
    } else if word.chars().all(char::is_uppercase) {
        TokenKind::Constant
    } else {
        TokenKind::Identifier
    };
    Some(kind)
}
