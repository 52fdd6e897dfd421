// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading the document index.
//!
//! None of these reach the reader of the page. The loader logs them and
//! degrades to an empty index; the next search pass tries again.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read index: {0}")]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("index request failed with HTTP {0}")]
    Status(u16),

    #[error("malformed index: {0}")]
    Parse(#[from] serde_json::Error),
}
