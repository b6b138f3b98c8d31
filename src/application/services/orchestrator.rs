// src/application/services/orchestrator.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    application::{
        dto::SearchRequest,
        ports::{search_api::SearchApi, viewport::Viewport},
    },
    domain::project::ResultsPage,
};

/// Result of one [`ResultsFetchOrchestrator::fetch`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was committed.
    Succeeded { total_count: u64 },
    /// The request failed; previously committed results are untouched.
    Failed { message: String },
    /// A newer request was issued before this one completed, so its
    /// response was discarded.
    Superseded,
}

impl FetchOutcome {
    pub fn is_committed(&self) -> bool {
        !matches!(self, Self::Superseded)
    }
}

/// Point-in-time copy of what the results area should display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsSnapshot {
    /// `None` until the first successful fetch.
    pub results: Option<ResultsPage>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl ResultsSnapshot {
    pub fn total_count(&self) -> u64 {
        self.results.as_ref().map_or(0, |page| page.total_count)
    }
}

#[derive(Default)]
struct FetchState {
    snapshot: ResultsSnapshot,
    latest_request: u64,
}

/// Issues searches and commits only the most recently issued one.
///
/// Every call to [`fetch`](Self::fetch) is tagged with a sequence number when
/// it starts. When a response arrives its tag is compared to the latest
/// issued tag under the same lock that guards the results, so a slow
/// response can never overwrite a newer one.
pub struct ResultsFetchOrchestrator {
    api: Arc<dyn SearchApi>,
    viewport: Arc<dyn Viewport>,
    state: Mutex<FetchState>,
}

impl ResultsFetchOrchestrator {
    pub fn new(api: Arc<dyn SearchApi>, viewport: Arc<dyn Viewport>) -> Self {
        Self {
            api,
            viewport,
            state: Mutex::new(FetchState::default()),
        }
    }

    pub fn snapshot(&self) -> ResultsSnapshot {
        self.lock().snapshot.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().snapshot.is_loading
    }

    /// Run `request`, then scroll to `restore_scroll` if this request is still
    /// the latest one when it completes.
    pub async fn fetch(&self, request: SearchRequest, restore_scroll: f64) -> FetchOutcome {
        let request_id = {
            let mut state = self.lock();
            state.latest_request += 1;
            state.snapshot.is_loading = true;
            state.latest_request
        };
        // Clears the loading flag if this future is dropped before completing.
        let _loading = LoadingGuard {
            state: &self.state,
            request_id,
        };

        tracing::debug!(
            request_id,
            offset = request.offset,
            limit = request.limit,
            "dispatching search"
        );
        let result = self.api.search(&request).await;

        let outcome = {
            let mut state = self.lock();
            if state.latest_request != request_id {
                tracing::debug!(
                    request_id,
                    latest = state.latest_request,
                    "discarding superseded search response"
                );
                return FetchOutcome::Superseded;
            }

            state.snapshot.is_loading = false;
            match result {
                Ok(page) => {
                    let total_count = page.total_count;
                    tracing::debug!(request_id, total_count, items = page.items.len(), "search committed");
                    state.snapshot.results = Some(page);
                    state.snapshot.last_error = None;
                    FetchOutcome::Succeeded { total_count }
                }
                Err(err) => {
                    let message = err.to_string();
                    tracing::warn!(request_id, error = %message, "search request failed");
                    state.snapshot.last_error = Some(message.clone());
                    FetchOutcome::Failed { message }
                }
            }
        };

        self.viewport.scroll_to(restore_scroll);
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, FetchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Turns loading off when the owning fetch ends while it is still the latest
/// request, including when the fetch future is cancelled mid-flight.
struct LoadingGuard<'a> {
    state: &'a Mutex<FetchState>,
    request_id: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.latest_request == self.request_id && state.snapshot.is_loading {
            tracing::debug!(request_id = self.request_id, "search cancelled");
            state.snapshot.is_loading = false;
        }
    }
}
