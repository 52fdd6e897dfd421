// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental sidebar search for static documentation and blog themes.
//!
//! The site generator writes every page's title, description, content, and
//! permalink into one `index.json`. This crate loads that file the first time
//! someone searches, matches the query as a case-insensitive substring, cuts a
//! highlighted snippet around the first hit, and renders at most ten results
//! into the sidebar.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  index/     │────▶│  search/     │────▶│  render.rs   │
//! │ (load once, │     │ (matcher,    │     │ (fragments,  │
//! │  cache)     │     │  snippet)    │     │  ResultsView)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        ▲                                        │
//!        │            ┌──────────────┐            ▼
//!        └────────────│controller.rs │────▶ layout.rs
//!                     │ (in-flight   │     (max-height)
//!                     │  guard)      │
//!                     └──────────────┘
//!                            ▲
//!              runtime/wasm.rs (DOM events, fetch, `/` shortcut)
//! ```
//!
//! Matching and snippet extraction are pure functions. The controller reaches
//! the page only through `ResultsView` and `PanelGeometry`, so the same code
//! runs in the browser, in the CLI, and in tests.
//!
//! # Usage
//!
//! ```
//! use sidesearch::{search, Document, SearchConfig};
//!
//! let docs = vec![Document::new(
//!     "Getting Started",
//!     "intro",
//!     "This guide walks through setup.",
//!     "/getting-started/",
//! )];
//!
//! let results = search(&docs, "guide", &SearchConfig::default());
//! assert_eq!(results[0].body_fragment, "This <mark>guide</mark> walks through setup.");
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod layout;
pub mod render;
pub mod search;
pub mod shortcut;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
pub mod runtime;

// Re-exports for public API
pub use config::{
    PageOptions, SearchConfig, INDEX_PATH, MAX_RESULTS, MIN_QUERY_CHARS, SNIPPET_LENGTH,
};
pub use controller::{SearchController, SearchOutcome};
pub use error::LoadError;
pub use index::{parse_index, IndexLoader, IndexSource, StaticSource};
pub use layout::{max_results_height, PanelGeometry};
pub use render::{render, ResultsView};
pub use search::{extract_snippet, extract_snippet_with_length, match_documents, search};
pub use shortcut::{should_focus_search, KeyPress, KeyTarget};
pub use types::{Document, ResultFragment, SearchResult};

#[cfg(not(target_arch = "wasm32"))]
pub use index::FileSource;
