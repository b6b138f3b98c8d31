// tests/support/mocks/preferences.rs
use std::sync::Mutex;

use async_trait::async_trait;
use clomonitor_search::application::{
    ApplicationResult, error::ApplicationError, ports::preferences::PreferencesRepository,
};
use clomonitor_search::domain::search::SearchPreferences;

#[derive(Default)]
pub struct InMemoryPreferencesRepo {
    stored: Mutex<Option<SearchPreferences>>,
    saves: Mutex<usize>,
    fail: bool,
}

impl InMemoryPreferencesRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every save fails with an infrastructure error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<SearchPreferences> {
        *self.stored.lock().unwrap()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryPreferencesRepo {
    async fn load(&self) -> ApplicationResult<Option<SearchPreferences>> {
        Ok(self.stored())
    }

    async fn save(&self, preferences: &SearchPreferences) -> ApplicationResult<()> {
        *self.saves.lock().unwrap() += 1;
        if self.fail {
            return Err(ApplicationError::infrastructure("disk full"));
        }
        *self.stored.lock().unwrap() = Some(*preferences);
        Ok(())
    }
}
