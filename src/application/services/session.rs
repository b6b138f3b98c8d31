// src/application/services/session.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::preferences::PreferencesRepository,
        services::{
            anchor::{AnchorScrollGuard, AnchorScroller},
            chips::{FilterChip, FilterChipPresenter},
            controller::SearchStateController,
            orchestrator::{FetchOutcome, ResultsFetchOrchestrator, ResultsSnapshot},
        },
    },
    domain::search::{PageSize, SearchPreferences, SortOptions},
};

/// Wires location changes and preference changes to fetches.
///
/// A fetch runs when the decoded criteria change, when the page size or sort
/// changes, and on the very first location. Re-reporting an unchanged
/// location is a no-op.
pub struct SearchSession {
    controller: SearchStateController,
    orchestrator: Arc<ResultsFetchOrchestrator>,
    preferences_repo: Option<Arc<dyn PreferencesRepository>>,
    anchor_scroller: Option<AnchorScroller>,
    anchor_guard: Option<AnchorScrollGuard>,
    loaded: bool,
}

impl SearchSession {
    pub fn new(
        controller: SearchStateController,
        orchestrator: Arc<ResultsFetchOrchestrator>,
    ) -> Self {
        Self {
            controller,
            orchestrator,
            preferences_repo: None,
            anchor_scroller: None,
            anchor_guard: None,
            loaded: false,
        }
    }

    pub fn with_preferences_repository(mut self, repo: Arc<dyn PreferencesRepository>) -> Self {
        self.preferences_repo = Some(repo);
        self
    }

    pub fn with_anchor_scroller(mut self, scroller: AnchorScroller) -> Self {
        self.anchor_scroller = Some(scroller);
        self
    }

    pub fn controller(&self) -> &SearchStateController {
        &self.controller
    }

    /// Access for user actions (filter toggles, paging, chip removal).
    pub fn controller_mut(&mut self) -> &mut SearchStateController {
        &mut self.controller
    }

    pub fn orchestrator(&self) -> Arc<ResultsFetchOrchestrator> {
        Arc::clone(&self.orchestrator)
    }

    pub fn snapshot(&self) -> ResultsSnapshot {
        self.orchestrator.snapshot()
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        FilterChipPresenter::present(self.controller.criteria())
    }

    /// Feed a new location query string. Returns the fetch outcome when a
    /// fetch was needed.
    pub async fn location_changed(&mut self, query: &str) -> Option<FetchOutcome> {
        let changed = self.controller.sync_from_location(query);
        if !changed && self.loaded {
            tracing::trace!(query, "location unchanged, skipping fetch");
            return None;
        }
        Some(self.refresh().await)
    }

    /// Fetch the current criteria unconditionally.
    pub async fn refresh(&mut self) -> FetchOutcome {
        self.loaded = true;
        let request = self.controller.remote_query_payload();
        let restore = self.controller.scroll_position();
        self.orchestrator.fetch(request, restore).await
    }

    pub async fn change_sort(&mut self, sort: SortOptions) -> Option<FetchOutcome> {
        let before = self.controller.preferences();
        let intent = self.controller.set_sort(sort);
        self.apply_preference_change(before, &intent.search).await
    }

    pub async fn change_page_size(&mut self, limit: PageSize) -> Option<FetchOutcome> {
        let before = self.controller.preferences();
        let intent = self.controller.set_page_size(limit);
        self.apply_preference_change(before, &intent.search).await
    }

    /// Scroll to `anchor` once it is laid out. Any previous poll is cancelled.
    /// Returns `false` when no scroller is configured.
    pub fn follow_anchor(&mut self, anchor: &str) -> bool {
        // Drop the old guard first so its poll stops before the new one starts.
        self.anchor_guard = None;
        let Some(scroller) = &self.anchor_scroller else {
            return false;
        };
        self.anchor_guard = Some(scroller.start(anchor));
        true
    }

    pub fn anchor_guard(&self) -> Option<&AnchorScrollGuard> {
        self.anchor_guard.as_ref()
    }

    /// Hand the running anchor poll to the caller, e.g. to wait on it.
    pub fn take_anchor_guard(&mut self) -> Option<AnchorScrollGuard> {
        self.anchor_guard.take()
    }

    async fn apply_preference_change(
        &mut self,
        before: SearchPreferences,
        search: &str,
    ) -> Option<FetchOutcome> {
        let criteria_changed = self.controller.sync_from_location(search);
        let after = self.controller.preferences();
        if after != before {
            self.persist_preferences(&after).await;
        }
        if !criteria_changed && after == before && self.loaded {
            return None;
        }
        Some(self.refresh().await)
    }

    async fn persist_preferences(&self, preferences: &SearchPreferences) {
        let Some(repo) = &self.preferences_repo else {
            return;
        };
        if let Err(err) = repo.save(preferences).await {
            tracing::warn!(error = %err, "failed to persist search preferences");
        }
    }
}
