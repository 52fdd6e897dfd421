// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Concrete index sources for native use. The browser source lives in
//! `runtime::wasm`.

use super::IndexSource;
use crate::error::LoadError;
use crate::types::Document;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Parse an `index.json` payload: a JSON array of documents.
pub fn parse_index(json: &str) -> Result<Vec<Document>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    docs: Vec<Document>,
}

impl StaticSource {
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }
}

impl IndexSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Document>, LoadError> {
        Ok(self.docs.clone())
    }
}

/// An `index.json` on the local filesystem, e.g. a site's `public/` output.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl IndexSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Document>, LoadError> {
        let json = std::fs::read_to_string(&self.path)?;
        parse_index(&json)
    }
}
