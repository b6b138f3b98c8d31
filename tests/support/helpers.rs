// tests/support/helpers.rs
use std::sync::Arc;

use chrono::NaiveDate;
use clomonitor_search::application::ports::{
    navigation::Navigator, search_api::SearchApi, viewport::Viewport,
};
use clomonitor_search::application::services::{
    PreferencesStore, ResultsFetchOrchestrator, SearchSession, SearchStateController,
};
use clomonitor_search::domain::search::SearchPreferences;
use clomonitor_search::infrastructure::history::InMemoryHistory;

use super::mocks::{InMemoryPreferencesRepo, RecordingViewport, StubSearchApi};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Controller wired to an in-memory history with default preferences.
pub fn controller() -> (SearchStateController, Arc<InMemoryHistory>, Arc<PreferencesStore>) {
    let history = Arc::new(InMemoryHistory::new());
    let preferences = Arc::new(PreferencesStore::new(SearchPreferences::default()));
    let navigator: Arc<dyn Navigator> = history.clone();
    let controller = SearchStateController::new(Arc::clone(&preferences), navigator);
    (controller, history, preferences)
}

pub struct Harness {
    pub session: SearchSession,
    pub api: Arc<StubSearchApi>,
    pub history: Arc<InMemoryHistory>,
    pub viewport: Arc<RecordingViewport>,
    pub preferences: Arc<PreferencesStore>,
    pub preferences_repo: Arc<InMemoryPreferencesRepo>,
}

/// Session over a stub API, recording viewport and in-memory preferences.
pub fn harness(api: StubSearchApi) -> Harness {
    harness_with_repo(api, InMemoryPreferencesRepo::new())
}

pub fn harness_with_repo(api: StubSearchApi, repo: InMemoryPreferencesRepo) -> Harness {
    let api = Arc::new(api);
    let viewport = Arc::new(RecordingViewport::new());
    let preferences_repo = Arc::new(repo);
    let (controller, history, preferences) = controller();

    let search_api: Arc<dyn SearchApi> = api.clone();
    let view: Arc<dyn Viewport> = viewport.clone();
    let orchestrator = Arc::new(ResultsFetchOrchestrator::new(search_api, view));
    let session = SearchSession::new(controller, orchestrator)
        .with_preferences_repository(preferences_repo.clone());

    Harness {
        session,
        api,
        history,
        viewport,
        preferences,
        preferences_repo,
    }
}
