//! Overlapping events while the index fetch is outstanding.

use super::common::{controller_with, getting_started_docs, GatedSource};
use futures::executor::block_on;
use futures::FutureExt;
use sidesearch::SearchOutcome;
use std::pin::pin;

#[test]
fn event_during_slow_fetch_is_dropped() {
    let (source, release) = GatedSource::new();
    let controller = controller_with(source);

    block_on(async {
        let mut first = pin!(controller.handle_query("guide"));
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(controller.is_in_flight());

        // Arrives while the first pass waits on the network
        let second = controller.handle_query("endpoint").now_or_never();
        assert_eq!(second, Some(SearchOutcome::Dropped));
        assert!(controller.is_in_flight());

        release.send(getting_started_docs()).unwrap();
        assert_eq!(first.await, SearchOutcome::Completed { rendered: 1 });
    });

    assert!(!controller.is_in_flight());
    assert_eq!(controller.loader().source().calls(), 1);

    // Only the first query was rendered
    let view = controller.view();
    assert_eq!(view.render_count(), 1);
    assert_eq!(view.clear_count(), 1);
    assert_eq!(view.fragments().len(), 1);
    assert_eq!(view.fragments()[0].href, "/getting-started/");
}

#[test]
fn next_event_after_fetch_runs_normally() {
    let (source, release) = GatedSource::new();
    let controller = controller_with(source);

    block_on(async {
        let first = controller.handle_query("guide");
        release.send(getting_started_docs()).unwrap();
        first.await;
    });

    // Index is cached now, so the pass completes without suspending
    let outcome = controller.handle_query("endpoint").now_or_never();
    assert_eq!(outcome, Some(SearchOutcome::Completed { rendered: 1 }));
    assert_eq!(controller.view().fragments()[0].href, "/api/");
    assert_eq!(controller.loader().source().calls(), 1);
}

#[test]
fn abandoned_pass_releases_guard() {
    let (source, _release) = GatedSource::new();
    let controller = controller_with(source);

    block_on(async {
        let mut pass = Box::pin(controller.handle_query("guide"));
        assert!(futures::poll!(pass.as_mut()).is_pending());
        assert!(controller.is_in_flight());
        drop(pass);
    });

    assert!(!controller.is_in_flight());
}

#[test]
fn failed_fetch_releases_guard() {
    let (source, release) = GatedSource::new();
    let controller = controller_with(source);

    block_on(async {
        let mut pass = pin!(controller.handle_query("guide"));
        assert!(futures::poll!(pass.as_mut()).is_pending());
        // Network gives up
        drop(release);
        assert_eq!(pass.await, SearchOutcome::Completed { rendered: 0 });
    });

    assert!(!controller.is_in_flight());
    assert!(!controller.loader().is_loaded());
    assert!(!controller.view().has_results());
}
