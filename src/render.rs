// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result rendering and the view seam.
//!
//! `render` turns search results into display fragments. `ResultsView` is the
//! only thing the controller knows about the page: the DOM implementation
//! lives in `runtime::wasm`, the terminal one in the CLI, and tests use
//! `testing::RecordingView`.

use crate::types::{ResultFragment, SearchResult};

/// Everything a search pass is allowed to change on screen.
pub trait ResultsView {
    /// Replace the list contents with `fragments`, in order.
    fn set_results(&self, fragments: &[ResultFragment]);

    /// Remove all rendered results.
    fn clear_results(&self);

    /// Toggle the "has results" state on the search input.
    fn set_has_results(&self, has_results: bool);

    /// Constrain the results list height, in CSS pixels.
    fn set_max_height(&self, height: f64);

    /// Number of results currently rendered.
    fn result_count(&self) -> usize;
}

/// One fragment per result, same order.
pub fn render(results: &[SearchResult<'_>]) -> Vec<ResultFragment> {
    results
        .iter()
        .map(|result| ResultFragment {
            title_html: result.title_fragment.clone(),
            body_html: result.body_fragment.clone(),
            href: result.document.permalink.clone(),
        })
        .collect()
}
