// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through a search pass.
//!
//! A `Document` comes off the wire once and is never touched again. Everything
//! else here is derived per query and thrown away when the next keystroke lands.
//!
//! # Invariants
//!
//! - **Index order**: documents keep their delivery order. The matcher relies on
//!   it, since there is no ranking to fall back on.
//! - **One fragment per result**: `render(results).len() == results.len()`.

use serde::{Deserialize, Serialize};

/// One searchable page, as produced by the site generator's `index.json`.
///
/// Entries are trusted. Missing fields deserialize to the empty string rather
/// than failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub title: String,
    pub description: String,
    pub content: String,
    pub permalink: String,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        permalink: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: content.into(),
            permalink: permalink.into(),
        }
    }

    /// The fields a query is matched against, in the order they are checked.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.content]
    }
}

/// A matched document with its highlighted title and body snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub document: &'a Document,
    /// Highlighted markup for the title field.
    pub title_fragment: String,
    /// Highlighted markup for the content field.
    pub body_fragment: String,
}

/// Display-ready form of a `SearchResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFragment {
    pub title_html: String,
    pub body_html: String,
    pub href: String,
}

impl ResultFragment {
    /// List item markup for the results container.
    ///
    /// `title_html` and `body_html` are inserted as produced by the snippet
    /// extractor; only the link target is escaped here.
    pub fn to_html(&self) -> String {
        format!(
            r#"<li><a class="search-result" href="{}"><div class="search-result__title">{}</div><p class="search-result__body">{}</p></a></li>"#,
            html_escape::encode_double_quoted_attribute(&self.href),
            self.title_html,
            self.body_html,
        )
    }
}
