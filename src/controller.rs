// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-widget search orchestration.
//!
//! One `SearchController` per search section on the page. Each owns its index
//! loader, its view, and an in-flight flag that keeps passes from overlapping.
//!
//! ```text
//!            ┌──────────── in flight? ── yes ──▶ Dropped
//!  event ────┤
//!            └─ no ─▶ clear view ─▶ too short? ── yes ──▶ BelowThreshold
//!                                      │
//!                                      no
//!                                      ▼
//!                          loader.load().await      (only suspension point)
//!                                      ▼
//!                       match ─▶ snippets ─▶ render ─▶ layout
//!                                      ▼
//!                               Completed { rendered }
//! ```
//!
//! Events that arrive while a pass is suspended on the index fetch are dropped,
//! not queued. Once the index is cached a pass never suspends, so in practice
//! only the first search on a page can lose keystrokes.

use crate::config::SearchConfig;
use crate::index::{IndexLoader, IndexSource};
use crate::layout::{self, PanelGeometry};
use crate::render::{render, ResultsView};
use crate::search::search;
use std::cell::Cell;

/// What happened to one input or focus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Another pass was in flight; the event was ignored.
    Dropped,
    /// Results were cleared; the query is too short to search.
    BelowThreshold,
    /// The pass ran to completion.
    Completed { rendered: usize },
}

/// Search state for one widget.
pub struct SearchController<S, V, G> {
    loader: IndexLoader<S>,
    view: V,
    geometry: G,
    config: SearchConfig,
    in_flight: Cell<bool>,
}

impl<S, V, G> SearchController<S, V, G>
where
    S: IndexSource,
    V: ResultsView,
    G: PanelGeometry,
{
    pub fn new(loader: IndexLoader<S>, view: V, geometry: G, config: SearchConfig) -> Self {
        Self {
            loader,
            view,
            geometry,
            config,
            in_flight: Cell::new(false),
        }
    }

    /// Handle the current contents of the search input.
    pub async fn handle_query(&self, query: &str) -> SearchOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            log::debug!("search in flight, dropping query {:?}", query);
            return SearchOutcome::Dropped;
        };

        self.view.set_has_results(false);
        self.view.clear_results();

        if query.chars().count() < self.config.min_chars {
            return SearchOutcome::BelowThreshold;
        }

        let docs = self.loader.load().await;
        let results = search(&docs, query, &self.config);
        let fragments = render(&results);
        self.view.set_results(&fragments);

        if !fragments.is_empty() {
            self.view.set_has_results(true);
            layout::adjust(&self.geometry, &self.view);
        }

        SearchOutcome::Completed {
            rendered: fragments.len(),
        }
    }

    /// Re-apply the results height cap, e.g. after a viewport resize.
    pub fn adjust_layout(&self) -> Option<f64> {
        layout::adjust(&self.geometry, &self.view)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub fn loader(&self) -> &IndexLoader<S> {
        &self.loader
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Holds the in-flight flag for the duration of one pass.
///
/// Released on drop, so an early return, a dropped future, or a panic cannot
/// leave the widget locked.
struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
