// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for sidebar search.
//!
//! This is the browser-facing API. Two entry points: `attach` wires every
//! sidebar search section on the page to its own `SearchController`, and
//! `SidesearchIndex` exposes the same matching and snippet logic to scripts
//! that want to drive their own UI.
//!
//! # Page wiring
//!
//! ```js
//! import init, { attach } from "./sidesearch.js";
//! await init();
//! attach();                      // /index.json, 3 chars, 10 results
//! attach({ indexPath: "/docs/index.json" });
//! ```
//!
//! # Markup contract
//!
//! ```html
//! <div class="sidebar__content">
//!   <section class="sidebar__section--search">
//!     <input type="search">
//!     <ul class="sidebar__section--search-results"></ul>
//!   </section>
//! </div>
//! ```
//!
//! A section missing any of these pieces is skipped; the rest still work.

use crate::config::{PageOptions, SearchConfig};
use crate::controller::SearchController;
use crate::error::LoadError;
use crate::index::{parse_index, IndexLoader, IndexSource};
use crate::layout::PanelGeometry;
use crate::render::{render, ResultsView};
use crate::runtime::console;
use crate::search::search;
use crate::shortcut::{should_focus_search, KeyPress, KeyTarget};
use crate::types::{Document, ResultFragment};
use gloo_net::http::Request;
use js_sys::Array;
use serde_wasm_bindgen::{from_value, to_value};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document as DomDocument, Element, EventTarget, HtmlButtonElement, HtmlElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent, Window,
};

const SEARCH_SECTION: &str = ".sidebar__section--search";
const RESULTS_CONTAINER: &str = ".sidebar__section--search-results";
const SIDEBAR_CONTENT: &str = ".sidebar__content";
const SEARCH_INPUT: &str = r#"input[type="text"], input[type="search"]"#;
const HAS_RESULTS_CLASS: &str = "has-results";

type DomController = SearchController<FetchSource, DomResultsView, DomGeometry>;

// ============================================================================
// PAGE WIRING
// ============================================================================

/// Wire every search section on the page. Returns the number wired.
///
/// `options` is optional and may only set `indexPath`. The query threshold,
/// result cap, and snippet window stay at the theme's values; other keys are
/// an error.
#[wasm_bindgen]
pub fn attach(options: JsValue) -> Result<usize, JsValue> {
    let config = parse_options(options)?;
    console::init(log::LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let sections = document.query_selector_all(SEARCH_SECTION)?;
    if sections.length() == 0 {
        return Ok(0);
    }

    let mut wired = 0;
    let mut first_section = None;
    for i in 0..sections.length() {
        let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if first_section.is_none() {
            first_section = Some(section.clone());
        }
        if wire_section(&window, &document, &section, &config)? {
            wired += 1;
        }
    }

    if let Some(first) = first_section {
        install_shortcut(&document, first)?;
    }

    log::debug!("sidebar search attached to {} section(s)", wired);
    Ok(wired)
}

fn parse_options(options: JsValue) -> Result<SearchConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(SearchConfig::default());
    }
    from_value::<PageOptions>(options)
        .map(PageOptions::into_config)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}

/// Connect one section's input to a new controller.
///
/// Returns `Ok(false)` when the section lacks an element it needs.
fn wire_section(
    window: &Window,
    document: &DomDocument,
    section: &Element,
    config: &SearchConfig,
) -> Result<bool, JsValue> {
    let Some(input) = find::<HtmlInputElement>(section.query_selector(SEARCH_INPUT)?) else {
        log::debug!("search section has no input, skipping");
        return Ok(false);
    };
    let Some(results) = find::<HtmlElement>(section.query_selector(RESULTS_CONTAINER)?) else {
        log::debug!("search section has no results container, skipping");
        return Ok(false);
    };
    let Some(sidebar) = find::<HtmlElement>(document.query_selector(SIDEBAR_CONTENT)?) else {
        log::debug!("no sidebar content element, skipping search section");
        return Ok(false);
    };
    let Some(container) = find::<HtmlElement>(input.closest(SEARCH_SECTION)?) else {
        log::debug!("search input is outside a search section, skipping");
        return Ok(false);
    };

    let controller: Rc<DomController> = Rc::new(SearchController::new(
        IndexLoader::new(FetchSource::new(&config.index_path)),
        DomResultsView {
            input: input.clone(),
            results,
        },
        DomGeometry { sidebar, container },
        config.clone(),
    ));

    controller.adjust_layout();

    let on_resize = {
        let controller = Rc::clone(&controller);
        Closure::<dyn Fn()>::new(move || {
            controller.adjust_layout();
        })
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    on_resize.forget();

    for event in ["input", "focus"] {
        let controller = Rc::clone(&controller);
        let source = input.clone();
        let handler = Closure::<dyn Fn()>::new(move || {
            let controller = Rc::clone(&controller);
            let query = source.value();
            spawn_local(async move {
                controller.handle_query(&query).await;
            });
        });
        input.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    Ok(true)
}

/// Global `/` listener focusing the first section's input.
fn install_shortcut(document: &DomDocument, first_section: Element) -> Result<(), JsValue> {
    let handler = Closure::<dyn Fn(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        let press = KeyPress {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            target: key_target(ev.target()),
        };
        if !should_focus_search(&press) {
            return;
        }
        ev.prevent_default();
        if let Ok(found) = first_section.query_selector(SEARCH_INPUT) {
            if let Some(input) = find::<HtmlElement>(found) {
                let _ = input.focus();
            }
        }
    });
    document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn key_target(target: Option<EventTarget>) -> KeyTarget {
    let Some(target) = target else {
        return KeyTarget::Other;
    };
    if target.has_type::<HtmlInputElement>() {
        KeyTarget::Input
    } else if target.has_type::<HtmlTextAreaElement>() {
        KeyTarget::TextArea
    } else if target.has_type::<HtmlButtonElement>() {
        KeyTarget::Button
    } else if target.has_type::<HtmlSelectElement>() {
        KeyTarget::Select
    } else {
        KeyTarget::Other
    }
}

fn find<T: JsCast>(element: Option<Element>) -> Option<T> {
    element.and_then(|e| e.dyn_into::<T>().ok())
}

// ============================================================================
// DOM ADAPTERS
// ============================================================================

/// Fetches `index.json` with the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl IndexSource for FetchSource {
    async fn fetch(&self) -> Result<Vec<Document>, LoadError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        let json = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        parse_index(&json)
    }
}

/// Results list and input element of one search section.
pub struct DomResultsView {
    input: HtmlInputElement,
    results: HtmlElement,
}

impl ResultsView for DomResultsView {
    fn set_results(&self, fragments: &[ResultFragment]) {
        let html: String = fragments.iter().map(ResultFragment::to_html).collect();
        self.results.set_inner_html(&html);
    }

    fn clear_results(&self) {
        self.results.set_inner_html("");
    }

    fn set_has_results(&self, has_results: bool) {
        let classes = self.input.class_list();
        let toggled = if has_results {
            classes.add_1(HAS_RESULTS_CLASS)
        } else {
            classes.remove_1(HAS_RESULTS_CLASS)
        };
        if let Err(e) = toggled {
            log::warn!("could not toggle {}: {:?}", HAS_RESULTS_CLASS, e);
        }
    }

    fn set_max_height(&self, height: f64) {
        if let Err(e) = self
            .results
            .style()
            .set_property("max-height", &format!("{}px", height))
        {
            log::warn!("could not set results max-height: {:?}", e);
        }
    }

    fn result_count(&self) -> usize {
        self.results.children().length() as usize
    }
}

/// Sidebar and search section measurements.
pub struct DomGeometry {
    sidebar: HtmlElement,
    container: HtmlElement,
}

impl PanelGeometry for DomGeometry {
    fn container_height(&self) -> f64 {
        f64::from(self.sidebar.client_height())
    }

    fn search_box_height(&self) -> f64 {
        f64::from(self.container.client_height())
    }
}

// ============================================================================
// PROGRAMMATIC API
// ============================================================================

/// In-memory index for scripts that render their own results.
#[wasm_bindgen]
pub struct SidesearchIndex {
    docs: Vec<Document>,
    config: SearchConfig,
}

#[wasm_bindgen]
impl SidesearchIndex {
    /// Create an index from the JSON text of `index.json`.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str, options: JsValue) -> Result<SidesearchIndex, JsValue> {
        let docs = parse_index(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = parse_options(options)?;
        Ok(SidesearchIndex { docs, config })
    }

    /// Number of documents.
    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Matching fragments as `{ titleHtml, bodyHtml, href }` objects.
    ///
    /// Queries below the minimum length return an empty array.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<Array, JsValue> {
        let out = Array::new();
        if query.chars().count() < self.config.min_chars {
            return Ok(out);
        }
        for fragment in render(&search(&self.docs, query, &self.config)) {
            let value = to_value(&fragment).map_err(|e| JsValue::from_str(&e.to_string()))?;
            out.push(&value);
        }
        Ok(out)
    }
}
