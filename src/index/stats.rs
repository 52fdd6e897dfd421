// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Summary of a loaded index, for `sidesearch inspect`.

use crate::types::Document;

/// Field sizes in characters, plus entries a reader could not use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub documents: usize,
    pub title_chars: usize,
    pub description_chars: usize,
    pub content_chars: usize,
    pub longest_content: usize,
    /// Positions of documents with an empty title.
    pub missing_title: Vec<usize>,
    /// Positions of documents with an empty permalink; their results link nowhere.
    pub missing_permalink: Vec<usize>,
}

impl IndexStats {
    pub fn from_docs(docs: &[Document]) -> Self {
        let mut stats = IndexStats {
            documents: docs.len(),
            ..IndexStats::default()
        };

        for (position, doc) in docs.iter().enumerate() {
            let content_chars = doc.content.chars().count();
            stats.title_chars += doc.title.chars().count();
            stats.description_chars += doc.description.chars().count();
            stats.content_chars += content_chars;
            stats.longest_content = stats.longest_content.max(content_chars);

            if doc.title.trim().is_empty() {
                stats.missing_title.push(position);
            }
            if doc.permalink.trim().is_empty() {
                stats.missing_permalink.push(position);
            }
        }

        stats
    }

    pub fn is_clean(&self) -> bool {
        self.missing_title.is_empty() && self.missing_permalink.is_empty()
    }
}
