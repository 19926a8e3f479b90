//! Pagination of synthesized text and page-range selection
//!
//! Pages are fixed-size character chunks of the full text. Selection
//! parses a range spec like `"1,3-5"` into 1-based page numbers.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginateError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Split `text` into pages of exactly `page_size` characters.
///
/// The last page holds the remainder. Empty text has no pages.
pub fn paginate(text: &str, page_size: usize) -> Result<Vec<String>, PaginateError> {
    if page_size == 0 {
        return Err(PaginateError::ZeroPageSize);
    }

    let chars: Vec<char> = text.chars().collect();
    let pages: Vec<String> = chars
        .chunks(page_size)
        .map(|chunk| chunk.iter().collect())
        .collect();

    tracing::debug!(page_size, pages = pages.len(), "paginated text");
    Ok(pages)
}

/// Resolve a range spec into 0-based page indices.
///
/// - empty spec: every page
/// - tokens are comma separated, each `N` or `START-END` (1-based, inclusive)
/// - malformed tokens and pages past `page_count` are skipped
/// - order follows the spec and duplicates are kept
pub fn select_page_indices(page_count: usize, range_spec: &str) -> Vec<usize> {
    if range_spec.trim().is_empty() {
        return (0..page_count).collect();
    }

    let mut selected = Vec::new();

    for token in range_spec.split(',').map(str::trim) {
        if let Some((start, end)) = token.split_once('-') {
            let bounds = (start.trim().parse::<usize>(), end.trim().parse::<usize>());
            let (Ok(start), Ok(end)) = bounds else {
                tracing::trace!(token, "skipping malformed page range");
                continue;
            };
            // Clamp to existing pages; reversed ranges leave first > last
            let first = start.max(1);
            let last = end.min(page_count);
            if first <= last {
                selected.extend(first - 1..last);
            }
        } else {
            match token.parse::<usize>() {
                Ok(page) if (1..=page_count).contains(&page) => selected.push(page - 1),
                _ => tracing::trace!(token, "skipping page token"),
            }
        }
    }

    selected
}

/// Select pages by range spec (see [`select_page_indices`])
pub fn select_pages(pages: &[String], range_spec: &str) -> Vec<String> {
    select_page_indices(pages.len(), range_spec)
        .into_iter()
        .map(|idx| pages[idx].clone())
        .collect()
}
