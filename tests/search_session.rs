mod support;

use std::sync::Arc;
use std::time::Duration;

use clomonitor_search::application::ports::viewport::Viewport;
use clomonitor_search::application::services::{AnchorScroller, FetchOutcome};
use clomonitor_search::domain::search::{
    FilterCategory, PageSize, SearchPreferences, SortBy, SortDirection, SortOptions,
};
use support::{InMemoryPreferencesRepo, StubSearchApi, harness, harness_with_repo, page_of};

#[tokio::test]
async fn first_location_always_fetches_and_repeats_do_not() {
    let mut h = harness(StubSearchApi::with_pages([page_of(&["argo"], 1)]));

    let outcome = h.session.location_changed("").await;
    assert_eq!(outcome, Some(FetchOutcome::Succeeded { total_count: 1 }));

    assert_eq!(h.session.location_changed("?page=1").await, None);
    assert_eq!(h.api.call_count(), 1);
    assert_eq!(h.session.snapshot().total_count(), 1);
}

#[tokio::test]
async fn reordered_filter_values_do_not_refetch() {
    let mut h = harness(StubSearchApi::new());

    assert!(h.session.location_changed("?rating=a&rating=b").await.is_some());
    assert_eq!(h.session.location_changed("?rating=b&rating=a").await, None);
    assert_eq!(h.api.call_count(), 1);
}

#[tokio::test]
async fn filter_toggle_round_trips_through_the_location() {
    let mut h = harness(StubSearchApi::new());
    h.session.location_changed("?page=3").await;

    let intent = h
        .session
        .controller_mut()
        .toggle_filter(FilterCategory::Maturity, "2", true);
    let outcome = h.session.location_changed(&intent.search).await;

    assert!(outcome.is_some());
    let request = h.api.last_request().expect("a request was sent");
    assert_eq!(request.maturity, vec![2]);
    assert_eq!(request.offset, 0);
    assert_eq!(h.session.chips().len(), 1);
    assert_eq!(h.history.current(), Some(intent));
}

#[tokio::test]
async fn changing_sort_fetches_once_and_persists() {
    let mut h = harness(StubSearchApi::new());
    h.session.location_changed("?rating=a&page=4").await;

    let sort = SortOptions::new(SortBy::Score, SortDirection::Desc);
    let outcome = h.session.change_sort(sort).await;
    assert!(outcome.is_some());

    let request = h.api.last_request().expect("a request was sent");
    assert_eq!(request.sort_by, SortBy::Score);
    assert_eq!(request.sort_direction, SortDirection::Desc);
    assert_eq!(request.offset, 0);
    assert_eq!(request.rating, vec!["a".to_string()]);

    let stored = h.preferences_repo.stored().expect("preferences saved");
    assert_eq!(stored.sort, sort);
    assert_eq!(h.preferences.get().sort, sort);

    // The replaced location is already reflected, so feeding it back is a no-op.
    let current = h.history.current().expect("navigated");
    assert!(current.replace);
    assert_eq!(h.session.location_changed(&current.search).await, None);
    assert_eq!(h.api.call_count(), 2);
}

#[tokio::test]
async fn reselecting_the_same_sort_on_page_one_does_nothing() {
    let mut h = harness(StubSearchApi::new());
    h.session.location_changed("").await;

    let outcome = h.session.change_sort(SortOptions::default()).await;

    assert_eq!(outcome, None);
    assert_eq!(h.api.call_count(), 1);
    assert_eq!(h.preferences_repo.save_count(), 0);
}

#[tokio::test]
async fn page_size_change_resets_to_first_page() {
    let mut h = harness(StubSearchApi::new());
    h.session.location_changed("?page=3").await;
    assert_eq!(h.api.last_request().map(|r| r.offset), Some(40));

    let limit = PageSize::new(40).expect("valid size");
    h.session.change_page_size(limit).await;

    let request = h.api.last_request().expect("a request was sent");
    assert_eq!(request.limit, 40);
    assert_eq!(request.offset, 0);
    assert_eq!(h.session.controller().criteria().page.get(), 1);
    assert_eq!(
        h.preferences_repo.stored(),
        Some(SearchPreferences {
            limit,
            sort: SortOptions::default(),
        })
    );
}

#[tokio::test]
async fn persistence_failures_do_not_block_the_search() {
    let mut h = harness_with_repo(StubSearchApi::new(), InMemoryPreferencesRepo::failing());
    h.session.location_changed("").await;

    let outcome = h
        .session
        .change_page_size(PageSize::new(60).expect("valid size"))
        .await;

    assert!(matches!(outcome, Some(FetchOutcome::Succeeded { .. })));
    assert_eq!(h.preferences_repo.save_count(), 1);
    assert_eq!(h.preferences_repo.stored(), None);
    assert_eq!(h.preferences.get().limit.get(), 60);
}

#[tokio::test]
async fn refresh_restores_the_saved_scroll_position() {
    let mut h = harness(StubSearchApi::new());
    h.session.location_changed("?text=cilium").await;

    h.session.controller_mut().save_scroll_position(350.0);
    h.session.refresh().await;

    assert_eq!(h.viewport.last_scroll(), Some(350.0));
    assert_eq!(h.api.call_count(), 2);
}

#[tokio::test]
async fn anchors_need_a_scroller_and_newer_anchors_win() {
    let mut h = harness(StubSearchApi::new());
    assert!(!h.session.follow_anchor("faq"));

    let viewport: Arc<dyn Viewport> = h.viewport.clone();
    let scroller = AnchorScroller::new(
        viewport,
        Duration::from_millis(5),
        Duration::from_secs(5),
    );
    let mut session = h.session.with_anchor_scroller(scroller);
    h.viewport.anchor_ready_after("details", 1, 900.0);

    assert!(session.follow_anchor("never-rendered"));
    assert!(session.follow_anchor("details"));

    for _ in 0..200 {
        if session.anchor_guard().is_some_and(|guard| guard.is_finished()) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(h.viewport.last_scroll(), Some(900.0));
}
