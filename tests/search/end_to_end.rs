//! Query to fragments, end to end.

use super::common::{fixture_docs, getting_started_docs};
use sidesearch::{render, search, Document, SearchConfig};

#[test]
fn guide_query_finds_getting_started() {
    let docs = getting_started_docs();
    let results = search(&docs, "guide", &SearchConfig::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.title, "Getting Started");

    let body = &results[0].body_fragment;
    assert!(body.contains("<mark>guide</mark>"));
    assert!(body.contains("This "));
    assert!(body.contains(" walks through setup."));
    assert!(!body.contains("..."));
}

#[test]
fn fragments_link_to_permalinks() {
    let docs = getting_started_docs();
    let fragments = render(&search(&docs, "reference", &SearchConfig::default()));

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].href, "/api/");
    assert_eq!(fragments[0].title_html, "API <mark>Reference</mark>");
}

#[test]
fn fragment_count_equals_result_count() {
    let docs = fixture_docs();
    let results = search(&docs, "rust", &SearchConfig::default());
    let fragments = render(&results);
    assert_eq!(results.len(), fragments.len());
    for (result, fragment) in results.iter().zip(&fragments) {
        assert_eq!(result.document.permalink, fragment.href);
    }
}

#[test]
fn document_markup_is_passed_through() {
    let docs = fixture_docs();
    let fragments = render(&search(&docs, "entities", &SearchConfig::default()));

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].title_html, "Escaping <HTML> & <mark>Entities</mark>");
    assert_eq!(
        fragments[0].body_html,
        "Write <code>&lt;mark&gt;</code> carefully; the a.b* pattern is literal."
    );

    // Only the link target is escaped
    let html = fragments[0].to_html();
    assert!(html.contains(r#"href="/escaping/?q=a&amp;b=c""#));
}

#[test]
fn every_matched_document_has_a_highlight() {
    let docs = vec![
        Document::new("Dotted", "", "body XİY text", "/dotted/"),
        Document::new("ΟΔΟΣ", "", "Greek road", "/road/"),
    ];
    let config = SearchConfig::default();

    let results = search(&docs, "xi\u{307}y", &config);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].body_fragment, "body <mark>XİY</mark> text");

    // Word-final sigma lowers to ς: no match, and nothing to mark
    assert!(search(&docs, "οδοσ", &config).is_empty());
    let results = search(&docs, "οδος", &config);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title_fragment, "<mark>ΟΔΟΣ</mark>");
}
