// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring matcher.
//!
//! A document matches when the lower-cased query appears anywhere in its
//! lower-cased title, description, or content (`search::lowercase`, the same
//! rule the snippet extractor highlights with). There is no scoring: results
//! come back in index order, so the site generator's ordering (usually newest
//! first) is the ranking.

use super::lowercase::lower;
use crate::types::Document;

/// Documents containing `query`, in index order, at most `limit` of them.
///
/// Stops scanning once `limit` matches are found.
pub fn match_documents<'a>(query: &str, docs: &'a [Document], limit: usize) -> Vec<&'a Document> {
    let needle = lower(query);
    docs.iter()
        .filter(|doc| contains_query(doc, &needle))
        .take(limit)
        .collect()
}

/// `needle` must already be lower-cased.
fn contains_query(doc: &Document, needle: &str) -> bool {
    doc.searchable_fields()
        .iter()
        .any(|field| lower(field).contains(needle))
}
