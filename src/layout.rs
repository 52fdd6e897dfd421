// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Results panel sizing.
//!
//! The results list sits under the search box inside the sidebar. Its height
//! is capped at whatever the sidebar has left, so a long list scrolls instead
//! of pushing the page.

use crate::render::ResultsView;

/// Measurements of the elements surrounding a results list.
pub trait PanelGeometry {
    /// Visible height of the sidebar content area.
    fn container_height(&self) -> f64;

    /// Height of the search section holding the input.
    fn search_box_height(&self) -> f64;
}

/// Height left for results once the search box is accounted for.
pub fn max_results_height(container_height: f64, search_box_height: f64) -> f64 {
    container_height - search_box_height
}

/// Apply the height cap to `view`, returning the value applied.
///
/// Does nothing while the list is empty.
pub fn adjust(geometry: &impl PanelGeometry, view: &impl ResultsView) -> Option<f64> {
    if view.result_count() == 0 {
        return None;
    }
    let height = max_results_height(geometry.container_height(), geometry.search_box_height());
    view.set_max_height(height);
    Some(height)
}
