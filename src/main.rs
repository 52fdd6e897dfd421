// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use futures::executor::block_on;
use sidesearch::index::stats::IndexStats;
use sidesearch::{
    Document, FileSource, IndexLoader, IndexSource, PanelGeometry, ResultFragment, ResultsView,
    SearchConfig, SearchController, SearchOutcome,
};
use std::cell::RefCell;

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            min_chars,
            snippet_length,
            html,
        } => {
            let config = SearchConfig {
                index_path: file,
                min_chars,
                max_results: limit,
                snippet_length,
            };
            run_search(config, &query, html)
        }
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", display::themed(display::Color::Red, &[display::BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn load_documents(path: &str) -> Result<(FileSource, Vec<Document>)> {
    let source = FileSource::new(path);
    let docs = block_on(source.fetch()).with_context(|| format!("failed to load {}", path))?;
    Ok((source, docs))
}

fn run_search(config: SearchConfig, query: &str, html: bool) -> Result<()> {
    // Load up front so a bad path is an error here instead of an empty result
    let (source, docs) = load_documents(&config.index_path)?;
    let min_chars = config.min_chars;

    let controller = SearchController::new(
        IndexLoader::seeded(source, docs),
        TerminalView::default(),
        TerminalGeometry::from_env(),
        config,
    );

    match block_on(controller.handle_query(query)) {
        SearchOutcome::BelowThreshold => display::print_below_threshold(query, min_chars),
        SearchOutcome::Completed { .. } if html => {
            display::print_html(&controller.view().fragments.borrow())
        }
        SearchOutcome::Completed { .. } => {
            display::print_results(query, &controller.view().fragments.borrow())
        }
        SearchOutcome::Dropped => log::warn!("search dropped"),
    }
    Ok(())
}

fn run_inspect(path: &str) -> Result<()> {
    let (_, docs) = load_documents(path)?;
    display::print_inspect(path, &IndexStats::from_docs(&docs));
    Ok(())
}

/// Collects fragments for printing once the pass completes.
#[derive(Default)]
struct TerminalView {
    fragments: RefCell<Vec<ResultFragment>>,
}

impl ResultsView for TerminalView {
    fn set_results(&self, fragments: &[ResultFragment]) {
        *self.fragments.borrow_mut() = fragments.to_vec();
    }

    fn clear_results(&self) {
        self.fragments.borrow_mut().clear();
    }

    fn set_has_results(&self, _has_results: bool) {}

    fn set_max_height(&self, height: f64) {
        log::debug!("results panel capped at {} rows", height);
    }

    fn result_count(&self) -> usize {
        self.fragments.borrow().len()
    }
}

/// Terminal rows standing in for sidebar pixels.
struct TerminalGeometry {
    rows: f64,
}

impl TerminalGeometry {
    fn from_env() -> Self {
        let rows = std::env::var("LINES")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(24.0);
        Self { rows }
    }
}

impl PanelGeometry for TerminalGeometry {
    fn container_height(&self) -> f64 {
        self.rows
    }

    // The prompt line
    fn search_box_height(&self) -> f64 {
        1.0
    }
}
