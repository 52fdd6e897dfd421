// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sidesearch command-line interface.
//!
//! Two subcommands: `search` runs a query through the same controller the
//! sidebar uses, against a local `index.json`, and `inspect` summarizes an
//! index. Useful for checking what readers will see before deploying.

pub mod display;

use clap::{Parser, Subcommand};
use sidesearch::{MAX_RESULTS, MIN_QUERY_CHARS, SNIPPET_LENGTH};

#[derive(Parser)]
#[command(
    name = "sidesearch",
    about = "Query a static site's search index the way the sidebar does",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index.json and display results
    Search {
        /// Path to index.json (e.g. public/index.json)
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = MAX_RESULTS)]
        limit: usize,

        /// Queries shorter than this return nothing
        #[arg(long, default_value_t = MIN_QUERY_CHARS)]
        min_chars: usize,

        /// Snippet window in characters
        #[arg(long, default_value_t = SNIPPET_LENGTH)]
        snippet_length: usize,

        /// Print the HTML fragments instead of formatted results
        #[arg(long)]
        html: bool,
    },

    /// Summarize an index.json
    Inspect {
        /// Path to index.json
        file: String,
    },
}
