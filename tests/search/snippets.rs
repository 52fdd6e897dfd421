//! Snippet extraction edge cases.

use sidesearch::{extract_snippet, SNIPPET_LENGTH};

#[test]
fn empty_field_or_query() {
    assert_eq!(extract_snippet("", "x"), "");
    assert_eq!(extract_snippet("hello world", ""), "");
}

#[test]
fn no_occurrence_long_field_truncates_to_window() {
    let field: String = ('a'..='z').cycle().take(300).collect();
    let snippet = extract_snippet(&field, "123");
    let expected: String = field.chars().take(SNIPPET_LENGTH).collect();
    assert_eq!(snippet, format!("{}...", expected));
}

#[test]
fn no_occurrence_short_field_unchanged() {
    let field = "A short description of the page.";
    assert_eq!(extract_snippet(field, "missing"), field);
    // Entities and markup from the index are not rewritten
    for field in ["Q&A: x < y", "It&rsquo;s simple", "<em>new</em> post"] {
        assert_eq!(extract_snippet(field, "zzz"), field);
    }
}

#[test]
fn occurrence_at_zero_has_no_leading_ellipsis() {
    let field = format!("Setup {}", "and more words ".repeat(20));
    let snippet = extract_snippet(&field, "setup");
    assert!(snippet.starts_with("<mark>Setup</mark>"));
    assert!(snippet.ends_with("..."));
}

#[test]
fn occurrence_at_zero_in_short_field_has_no_ellipsis() {
    assert_eq!(extract_snippet("Setup guide", "setup"), "<mark>Setup</mark> guide");
}

#[test]
fn literal_query_is_highlighted() {
    assert_eq!(extract_snippet("a.b*c", "a.b*"), "<mark>a.b*</mark>c");
}

#[test]
fn metacharacters_in_query_are_literal() {
    for query in ["(", "[", "a|b", "^$", "\\", "+?", "{2}"] {
        let field = format!("x {} y", query);
        let snippet = extract_snippet(&field, query);
        assert!(snippet.contains("<mark>"), "query {:?} not highlighted: {}", query, snippet);
    }
}

#[test]
fn window_is_centered_seventy_chars_before_match() {
    let field = format!("{}TARGET{}", "-".repeat(150), "-".repeat(150));
    let snippet = extract_snippet(&field, "target");
    let before = snippet
        .trim_start_matches("...")
        .split("<mark>")
        .next()
        .unwrap();
    assert_eq!(before.chars().count(), 70);
}

#[test]
fn only_occurrences_inside_window_are_marked() {
    let field = format!("word {} word", "x".repeat(300));
    let snippet = extract_snippet(&field, "word");
    assert_eq!(snippet.matches("<mark>").count(), 1);
}
