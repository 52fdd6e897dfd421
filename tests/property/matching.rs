//! Matcher agrees with a naive filter over the index.

use proptest::prelude::*;
use sidesearch::{match_documents, search, Document, SearchConfig, MAX_RESULTS};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so random queries actually hit.
fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB ]{0,12}").unwrap()
}

fn doc_strategy() -> impl Strategy<Value = Document> {
    (field_strategy(), field_strategy(), field_strategy(), 0usize..1000).prop_map(
        |(title, description, content, id)| {
            Document::new(title, description, content, format!("/p/{}/", id))
        },
    )
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(doc_strategy(), 0..40)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{1,3}").unwrap()
}

/// Reference: filter on lower-cased fields, keep index order, cap.
fn oracle(query: &str, docs: &[Document], limit: usize) -> Vec<usize> {
    let needle = query.to_lowercase();
    docs.iter()
        .enumerate()
        .filter(|(_, d)| {
            d.title.to_lowercase().contains(&needle)
                || d.description.to_lowercase().contains(&needle)
                || d.content.to_lowercase().contains(&needle)
        })
        .map(|(i, _)| i)
        .take(limit)
        .collect()
}

fn positions(results: &[&Document], docs: &[Document]) -> Vec<usize> {
    results
        .iter()
        .map(|r| docs.iter().position(|d| std::ptr::eq(d, *r)).unwrap())
        .collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_matcher_equals_oracle(docs in corpus_strategy(), query in query_strategy()) {
        let results = match_documents(&query, &docs, MAX_RESULTS);
        prop_assert_eq!(positions(&results, &docs), oracle(&query, &docs, MAX_RESULTS));
    }

    #[test]
    fn prop_results_capped(docs in corpus_strategy(), query in query_strategy(), limit in 0usize..15) {
        let results = match_documents(&query, &docs, limit);
        prop_assert!(results.len() <= limit);
    }

    #[test]
    fn prop_query_case_is_irrelevant(docs in corpus_strategy(), query in query_strategy()) {
        let lower = positions(&match_documents(&query.to_lowercase(), &docs, MAX_RESULTS), &docs);
        let upper = positions(&match_documents(&query.to_uppercase(), &docs, MAX_RESULTS), &docs);
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn prop_search_keeps_matcher_order(docs in corpus_strategy(), query in query_strategy()) {
        let config = SearchConfig::default();
        let results = search(&docs, &query, &config);
        let matched = match_documents(&query, &docs, config.max_results);
        prop_assert_eq!(results.len(), matched.len());
        for (result, doc) in results.iter().zip(matched) {
            prop_assert!(std::ptr::eq(result.document, doc));
        }
    }
}
