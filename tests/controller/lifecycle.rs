//! Pass-by-pass behavior once events are not overlapping.

use super::common::{
    controller_with, fixture_docs, getting_started_docs, make_doc, static_controller,
    ScriptedSource,
};
use futures::executor::block_on;
use sidesearch::{LoadError, ResultsView, SearchOutcome};

#[test]
fn short_queries_never_touch_the_network() {
    let source = ScriptedSource::new(vec![Ok(getting_started_docs())]);
    let controller = controller_with(source);

    for query in ["", "g", "gu"] {
        assert_eq!(block_on(controller.handle_query(query)), SearchOutcome::BelowThreshold);
    }

    assert_eq!(controller.loader().source().calls(), 0);
    assert_eq!(controller.view().result_count(), 0);
    assert!(!controller.view().has_results());
}

#[test]
fn index_is_fetched_once_for_many_queries() {
    let source = ScriptedSource::new(vec![Ok(fixture_docs())]);
    let controller = controller_with(source);

    for query in ["rus", "rust", "rust o", "rust ow"] {
        block_on(controller.handle_query(query));
    }

    assert_eq!(controller.loader().source().calls(), 1);
    assert_eq!(controller.view().fragments()[0].href, "/rust/ownership/");
}

#[test]
fn result_cap_applies_to_rendered_fragments() {
    let controller = static_controller(fixture_docs());
    assert_eq!(
        block_on(controller.handle_query("rust")),
        SearchOutcome::Completed { rendered: 10 }
    );
    assert_eq!(controller.view().result_count(), 10);
}

#[test]
fn has_results_follows_each_pass() {
    let controller = static_controller(getting_started_docs());

    block_on(controller.handle_query("guide"));
    assert!(controller.view().has_results());

    block_on(controller.handle_query("nothing like this"));
    assert!(!controller.view().has_results());

    block_on(controller.handle_query("api"));
    assert!(controller.view().has_results());

    block_on(controller.handle_query("ap"));
    assert!(!controller.view().has_results());
}

#[test]
fn layout_tracks_resize() {
    let controller = static_controller(getting_started_docs());

    // Nothing rendered yet: resize is a no-op
    assert_eq!(controller.adjust_layout(), None);

    block_on(controller.handle_query("guide"));
    assert_eq!(controller.view().max_height(), Some(500.0));

    controller.geometry().resize(900.0);
    assert_eq!(controller.adjust_layout(), Some(800.0));
    assert_eq!(controller.view().max_height(), Some(800.0));
}

#[test]
fn load_failure_degrades_to_no_results_and_retries() {
    let source = ScriptedSource::new(vec![
        Err(LoadError::Network("connection reset".to_string())),
        Err(LoadError::Status(404)),
        Ok(vec![make_doc(0, "Alpha")]),
    ]);
    let controller = controller_with(source);

    assert_eq!(
        block_on(controller.handle_query("alpha")),
        SearchOutcome::Completed { rendered: 0 }
    );
    assert_eq!(
        block_on(controller.handle_query("alpha")),
        SearchOutcome::Completed { rendered: 0 }
    );
    assert_eq!(
        block_on(controller.handle_query("alpha")),
        SearchOutcome::Completed { rendered: 1 }
    );

    // Cached now; the script is exhausted, so another fetch would fail
    assert_eq!(
        block_on(controller.handle_query("alpha")),
        SearchOutcome::Completed { rendered: 1 }
    );
    assert_eq!(controller.loader().source().calls(), 3);
}

#[test]
fn widgets_are_independent() {
    let left = static_controller(getting_started_docs());
    let right = static_controller(getting_started_docs());

    block_on(left.handle_query("guide"));

    assert!(left.loader().is_loaded());
    assert!(!right.loader().is_loaded());
    assert_eq!(right.view().result_count(), 0);
}
