//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sidesearch::testing::{FixedGeometry, RecordingView};
use sidesearch::{parse_index, Document, IndexLoader, SearchConfig, SearchController, StaticSource};
use std::fs;
use std::sync::LazyLock;

// Re-export canonical test utilities from sidesearch::testing
pub use sidesearch::testing::{make_doc, make_docs_with_content, GatedSource, ScriptedSource};

// ============================================================================
// FIXTURES
// ============================================================================

/// Hugo-style index with 16 documents: two docs pages, twelve "Rust ..."
/// pages, one with markup in its text, one with accented text.
pub const FIXTURE_INDEX: &str = "tests/fixtures/index.json";

static FIXTURE_DOCS: LazyLock<Vec<Document>> = LazyLock::new(|| {
    let json = fs::read_to_string(FIXTURE_INDEX).expect("Failed to read fixture index");
    parse_index(&json).expect("Fixture index is not valid")
});

pub fn fixture_docs() -> Vec<Document> {
    FIXTURE_DOCS.clone()
}

/// The two-document index used by the end-to-end examples.
pub fn getting_started_docs() -> Vec<Document> {
    vec![
        Document::new(
            "Getting Started",
            "intro",
            "This guide walks through setup.",
            "/getting-started/",
        ),
        Document::new(
            "API Reference",
            "endpoints",
            "Detailed endpoint list.",
            "/api/",
        ),
    ]
}

// ============================================================================
// CONTROLLERS
// ============================================================================

pub type TestController<S> = SearchController<S, RecordingView, FixedGeometry>;

/// Controller over an in-memory index, sidebar 600px with a 100px search box.
pub fn static_controller(docs: Vec<Document>) -> TestController<StaticSource> {
    controller_with(StaticSource::new(docs))
}

pub fn controller_with<S: sidesearch::IndexSource>(source: S) -> TestController<S> {
    SearchController::new(
        IndexLoader::new(source),
        RecordingView::default(),
        FixedGeometry::new(600.0, 100.0),
        SearchConfig::default(),
    )
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Every result comes from `docs`, and results appear in index order.
pub fn assert_in_index_order(results: &[&Document], docs: &[Document]) {
    let positions: Vec<usize> = results
        .iter()
        .map(|r| {
            docs.iter()
                .position(|d| std::ptr::eq(d, *r))
                .expect("result does not come from the index")
        })
        .collect();
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "results out of index order: {:?}", positions);
    }
}
