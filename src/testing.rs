//! Test utilities shared across unit tests, integration tests, and benchmarks.
//!
//! This module is always compiled but hidden from documentation.
//! It provides in-memory stand-ins for the page: a view that records what it
//! was told, fixed panel geometry, and index sources with scripted behavior.

#![doc(hidden)]

use crate::error::LoadError;
use crate::index::IndexSource;
use crate::layout::PanelGeometry;
use crate::render::ResultsView;
use crate::types::{Document, ResultFragment};
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Create a test document whose fields all mention `title`.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: usize, title: &str) -> Document {
    Document {
        title: title.to_string(),
        description: format!("Description of {}", title),
        content: format!("Content about {}", title),
        permalink: format!("/doc/{}/", id),
    }
}

/// Create `count` documents titled "Post 0", "Post 1", ... sharing `content`.
pub fn make_docs_with_content(count: usize, content: &str) -> Vec<Document> {
    (0..count)
        .map(|id| Document {
            title: format!("Post {}", id),
            description: String::new(),
            content: content.to_string(),
            permalink: format!("/doc/{}/", id),
        })
        .collect()
}

// ============================================================================
// VIEW + GEOMETRY
// ============================================================================

/// `ResultsView` that keeps the last state it was given.
#[derive(Debug, Default)]
pub struct RecordingView {
    fragments: RefCell<Vec<ResultFragment>>,
    has_results: Cell<bool>,
    max_height: Cell<Option<f64>>,
    clears: Cell<usize>,
    renders: Cell<usize>,
}

impl RecordingView {
    pub fn fragments(&self) -> Vec<ResultFragment> {
        self.fragments.borrow().clone()
    }

    pub fn has_results(&self) -> bool {
        self.has_results.get()
    }

    pub fn max_height(&self) -> Option<f64> {
        self.max_height.get()
    }

    /// How many times `clear_results` was called.
    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }

    /// How many times `set_results` was called.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

impl ResultsView for RecordingView {
    fn set_results(&self, fragments: &[ResultFragment]) {
        self.renders.set(self.renders.get() + 1);
        *self.fragments.borrow_mut() = fragments.to_vec();
    }

    fn clear_results(&self) {
        self.clears.set(self.clears.get() + 1);
        self.fragments.borrow_mut().clear();
    }

    fn set_has_results(&self, has_results: bool) {
        self.has_results.set(has_results);
    }

    fn set_max_height(&self, height: f64) {
        self.max_height.set(Some(height));
    }

    fn result_count(&self) -> usize {
        self.fragments.borrow().len()
    }
}

/// Panel measurements that only change when a test says so.
#[derive(Debug)]
pub struct FixedGeometry {
    container: Cell<f64>,
    search_box: Cell<f64>,
}

impl FixedGeometry {
    pub fn new(container: f64, search_box: f64) -> Self {
        Self {
            container: Cell::new(container),
            search_box: Cell::new(search_box),
        }
    }

    /// Simulate a viewport resize.
    pub fn resize(&self, container: f64) {
        self.container.set(container);
    }
}

impl PanelGeometry for FixedGeometry {
    fn container_height(&self) -> f64 {
        self.container.get()
    }

    fn search_box_height(&self) -> f64 {
        self.search_box.get()
    }
}

// ============================================================================
// INDEX SOURCES
// ============================================================================

/// Source that replays a fixed sequence of fetch results, one per call.
///
/// Calls past the end of the script fail with a network error.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: RefCell<VecDeque<Result<Vec<Document>, LoadError>>>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Vec<Document>, LoadError>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl IndexSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<Document>, LoadError> {
        self.calls.set(self.calls.get() + 1);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(LoadError::Network("script exhausted".to_string())))
    }
}

/// Source whose single fetch stays pending until the test releases it.
///
/// Simulates a slow network: create with `GatedSource::new()`, start a search,
/// then send the documents through the returned sender.
#[derive(Debug)]
pub struct GatedSource {
    gate: RefCell<Option<oneshot::Receiver<Vec<Document>>>>,
    calls: Cell<usize>,
}

impl GatedSource {
    pub fn new() -> (Self, oneshot::Sender<Vec<Document>>) {
        let (tx, rx) = oneshot::channel();
        let source = Self {
            gate: RefCell::new(Some(rx)),
            calls: Cell::new(0),
        };
        (source, tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl IndexSource for GatedSource {
    async fn fetch(&self) -> Result<Vec<Document>, LoadError> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| LoadError::Network("gate dropped".to_string())),
            None => Err(LoadError::Network("gate already used".to_string())),
        }
    }
}
