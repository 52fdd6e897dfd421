// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy, load-once document index.
//!
//! The index is one JSON array produced at site build time. Nothing is fetched
//! until the first query long enough to search; after a successful load the
//! documents are cached for the loader's lifetime and never touched again.
//!
//! Failure is not sticky. A network error or a malformed payload is logged,
//! the pass sees an empty index, and the next pass fetches again. There is
//! no backoff and no timeout.
//!
//! ```text
//! load() ──▶ cached? ──yes──▶ Rc<[Document]>
//!               │
//!               no
//!               ▼
//!         source.fetch().await ──Ok(non-empty)──▶ cache + return
//!               │
//!               └──Err / empty──▶ log, return [] (cache stays empty)
//! ```

mod source;
pub mod stats;

pub use source::{parse_index, StaticSource};

#[cfg(not(target_arch = "wasm32"))]
pub use source::FileSource;

use crate::error::LoadError;
use crate::types::Document;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Where the documents come from.
///
/// Futures are not `Send`: everything runs on the UI thread.
#[allow(async_fn_in_trait)]
pub trait IndexSource {
    async fn fetch(&self) -> Result<Vec<Document>, LoadError>;
}

/// Caching front for an `IndexSource`.
pub struct IndexLoader<S> {
    source: S,
    cache: RefCell<Option<Rc<[Document]>>>,
    fetches: Cell<usize>,
}

impl<S: IndexSource> IndexLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RefCell::new(None),
            fetches: Cell::new(0),
        }
    }

    /// Loader whose cache is already populated; `source` is never consulted
    /// unless `docs` is empty.
    pub fn seeded(source: S, docs: Vec<Document>) -> Self {
        let loader = Self::new(source);
        if !docs.is_empty() {
            *loader.cache.borrow_mut() = Some(docs.into());
        }
        loader
    }

    /// Return the cached index, fetching it first if needed.
    ///
    /// Never fails: errors are logged and yield an empty slice.
    pub async fn load(&self) -> Rc<[Document]> {
        if let Some(docs) = self.cached() {
            return docs;
        }

        self.fetches.set(self.fetches.get() + 1);
        log::debug!("fetching search index (attempt {})", self.fetches.get());

        match self.source.fetch().await {
            Ok(docs) if docs.is_empty() => {
                log::warn!("search index is empty");
                Rc::from(Vec::new())
            }
            Ok(docs) => {
                log::info!("search index loaded: {} documents", docs.len());
                let docs: Rc<[Document]> = docs.into();
                *self.cache.borrow_mut() = Some(Rc::clone(&docs));
                docs
            }
            Err(e) => {
                log::error!("failed to load search index: {}", e);
                Rc::from(Vec::new())
            }
        }
    }

    /// The cached index, if a load has succeeded.
    pub fn cached(&self) -> Option<Rc<[Document]>> {
        self.cache.borrow().as_ref().map(Rc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// Number of times the source has been asked for documents.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
