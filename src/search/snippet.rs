// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction and highlighting.
//!
//! Given a field and a query, produce a bounded excerpt centered on the first
//! match, with every occurrence inside the excerpt wrapped in `<mark>`.
//!
//! ```text
//! field:   ......................[query]...........................
//!                       |<-- 70 -->|
//! window:          ...  [start ............................. end)  ...
//!                  ^ leading ellipsis if start > 0        ^ trailing if end < len
//! ```
//!
//! # Units
//!
//! All positions are counted in `char`s, not bytes. A window boundary can fall
//! anywhere in the text without splitting a multi-byte character.
//!
//! # Matching
//!
//! Occurrences are found with the matcher's lower-casing rule (see
//! `search::lowercase`), so a document that matches always gets its hit
//! highlighted, and nothing the matcher would reject is marked. The query is
//! plain text; `.` or `*` are not special.
//!
//! # Markup
//!
//! Field text is copied as is. The index is trusted and may carry entities
//! (`&rsquo;`) or inline markup the page is meant to render.

use super::lowercase::{lower, LoweredText};
use crate::config::SNIPPET_LENGTH;
use std::ops::Range;

const ELLIPSIS: &str = "...";
const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// Highlighted excerpt of `field` around `query`, using the default window.
pub fn extract_snippet(field: &str, query: &str) -> String {
    extract_snippet_with_length(field, query, SNIPPET_LENGTH)
}

/// Highlighted excerpt of `field` around `query`, at most `length` characters
/// of source text plus ellipses and markup.
pub fn extract_snippet_with_length(field: &str, query: &str, length: usize) -> String {
    if field.is_empty() || query.is_empty() {
        return String::new();
    }

    let needle = lower(query);
    let text = LoweredText::new(field);

    let Some(match_at) = text.find(&needle) else {
        return truncate(field, length);
    };

    let char_len = text.char_count();
    let start = match_at.saturating_sub(length / 2);
    let end = char_len.min(start + length);

    let marks = text.occurrences(&needle, start, end);
    let mut snippet = String::with_capacity(field.len().min(4 * length) + 2 * ELLIPSIS.len() + 16);

    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    highlight_into(&mut snippet, field, start..end, &marks);
    if end < char_len {
        snippet.push_str(ELLIPSIS);
    }

    snippet
}

/// No match: whole field if it fits, else the first `length` chars + ellipsis.
fn truncate(field: &str, length: usize) -> String {
    if field.chars().count() <= length {
        return field.to_string();
    }
    format!("{}{}", char_slice(field, 0, length), ELLIPSIS)
}

/// Append chars `window` of `field` to `out`, wrapping each of `marks` (sorted,
/// disjoint, inside `window`) in `<mark>`.
fn highlight_into(out: &mut String, field: &str, window: Range<usize>, marks: &[Range<usize>]) {
    let mut last = window.start;
    for mark in marks {
        out.push_str(char_slice(field, last, mark.start));
        out.push_str(MARK_OPEN);
        out.push_str(char_slice(field, mark.start, mark.end));
        out.push_str(MARK_CLOSE);
        last = mark.end;
    }
    out.push_str(char_slice(field, last, window.end));
}

/// Substring by char positions `[start, end)`, clamped to the text.
fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let mut boundaries = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));

    let from = boundaries.nth(start).unwrap_or(text.len());
    let to = if end > start {
        boundaries.nth(end - start - 1).unwrap_or(text.len())
    } else {
        from
    };
    &text[from..to]
}
