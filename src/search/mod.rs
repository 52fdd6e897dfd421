// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: find the matching documents, then cut a highlighted
//! snippet out of each one's title and content.
//!
//! Both steps are pure and DOM-free. Presentation lives in `render`.

pub mod lowercase;
pub mod matcher;
pub mod snippet;

use crate::config::SearchConfig;
use crate::types::{Document, SearchResult};

pub use matcher::match_documents;
pub use snippet::{extract_snippet, extract_snippet_with_length};

/// Run `query` against `docs` with the widget's result cap and snippet window.
pub fn search<'a>(docs: &'a [Document], query: &str, config: &SearchConfig) -> Vec<SearchResult<'a>> {
    match_documents(query, docs, config.max_results)
        .into_iter()
        .map(|document| SearchResult {
            document,
            title_fragment: extract_snippet_with_length(&document.title, query, config.snippet_length),
            body_fragment: extract_snippet_with_length(&document.content, query, config.snippet_length),
        })
        .collect()
}
