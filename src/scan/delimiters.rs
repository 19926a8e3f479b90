//! Balanced parenthesis check over synthesized text

use super::SyntaxError;

/// Report unmatched `(` and `)` in `text`.
///
/// Closing parens without an open one are reported where they occur.
/// Opens left on the stack are drained afterwards, most recent first, so
/// they are not in position order.
pub fn check_delimiters(text: &str) -> Vec<SyntaxError> {
    let mut errors = Vec::new();
    let mut open = Vec::new();

    for (offset, ch) in text.chars().enumerate() {
        match ch {
            '(' => open.push(offset),
            ')' => {
                if open.pop().is_none() {
                    errors.push(SyntaxError::structural(offset, "unmatched closing ')'"));
                }
            }
            _ => {}
        }
    }

    while let Some(offset) = open.pop() {
        errors.push(SyntaxError::structural(offset, "unmatched opening '('"));
    }

    errors
}
