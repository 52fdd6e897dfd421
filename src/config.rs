// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! The query threshold, result cap, and snippet window are part of the theme's
//! behavior and fixed in the browser. A page may only move the index
//! (`attach({ indexPath: "/docs/index.json" })`). The CLI can override every
//! field for experiments.

use serde::Deserialize;

/// Site-relative path of the generated document index.
pub const INDEX_PATH: &str = "/index.json";

/// Queries shorter than this (in characters) never trigger a search.
pub const MIN_QUERY_CHARS: usize = 3;

/// Maximum number of documents rendered per pass.
pub const MAX_RESULTS: usize = 10;

/// Snippet window length in characters, centered on the first match.
pub const SNIPPET_LENGTH: usize = 140;

/// Per-widget search settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Where the index is fetched from (default: `/index.json`)
    pub index_path: String,
    /// Minimum query length in characters (default: 3)
    pub min_chars: usize,
    /// Result cap (default: 10)
    pub max_results: usize,
    /// Snippet window in characters (default: 140)
    pub snippet_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_path: INDEX_PATH.to_string(),
            min_chars: MIN_QUERY_CHARS,
            max_results: MAX_RESULTS,
            snippet_length: SNIPPET_LENGTH,
        }
    }
}

/// Options object accepted from the page.
///
/// Unknown keys are rejected, so `{ minChars: 2 }` is an error instead of a
/// silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageOptions {
    pub index_path: Option<String>,
}

impl PageOptions {
    /// Theme defaults with the page's index location applied.
    pub fn into_config(self) -> SearchConfig {
        let mut config = SearchConfig::default();
        if let Some(path) = self.index_path {
            config.index_path = path;
        }
        config
    }
}
