// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one case rule used for matching and highlighting.
//!
//! Both sides are lower-cased with `str::to_lowercase` and compared as plain
//! substrings. That includes its context-dependent final sigma: `ΟΔΟΣ` lowers
//! to `οδος`, so the query `οδοσ` does not match it. No other normalization.
//!
//! Lower-casing can change length (`İ` becomes `i` + U+0307), so positions
//! found in the lowered text are mapped back to chars of the source.

use std::ops::Range;

/// Lower-cased copy of `text`.
pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// Lower-cased text with a map from lowered bytes back to source chars.
#[derive(Debug, Clone)]
pub struct LoweredText {
    lowered: String,
    /// `starts[i]` is where source char `i` begins in `lowered`; the last
    /// entry is `lowered.len()`. Strictly increasing.
    starts: Vec<usize>,
}

impl LoweredText {
    pub fn new(text: &str) -> Self {
        let mut starts = Vec::with_capacity(text.len() + 1);
        let mut offset = 0;
        for c in text.chars() {
            starts.push(offset);
            offset += c.to_lowercase().map(char::len_utf8).sum::<usize>();
        }
        starts.push(offset);

        // Context-dependent mappings (final sigma) keep the per-char byte
        // length, so the offsets line up with the whole-string lowering.
        let mut lowered = lower(text);
        if lowered.len() != offset {
            lowered = text.chars().flat_map(char::to_lowercase).collect();
        }

        Self { lowered, starts }
    }

    /// Number of chars in the source text.
    pub fn char_count(&self) -> usize {
        self.starts.len() - 1
    }

    /// Source char index of the first occurrence of `needle` (already lowered).
    pub fn find(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.lowered.find(needle).map(|at| self.char_at(at))
    }

    /// Non-overlapping occurrences of `needle` lying entirely inside source
    /// chars `[start, end)`, as source char ranges.
    ///
    /// An occurrence touching part of a char's lowered form covers that whole
    /// source char.
    pub fn occurrences(&self, needle: &str, start: usize, end: usize) -> Vec<Range<usize>> {
        let end = end.min(self.char_count());
        if needle.is_empty() || start >= end {
            return Vec::new();
        }

        let from = self.starts[start];
        let to = self.starts[end];
        let mut ranges: Vec<Range<usize>> = Vec::new();
        for (at, found) in self.lowered[from..to].match_indices(needle) {
            let first = self.char_at(from + at);
            let last = self.char_at(from + at + found.len() - 1) + 1;
            if ranges.last().is_some_and(|prev| first < prev.end) {
                continue;
            }
            ranges.push(first..last);
        }
        ranges
    }

    /// Source char whose lowered form contains byte `offset`.
    fn char_at(&self, offset: usize) -> usize {
        self.starts.partition_point(|&s| s <= offset) - 1
    }
}
