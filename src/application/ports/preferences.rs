// src/application/ports/preferences.rs
use crate::application::ApplicationResult;
use crate::domain::search::SearchPreferences;
use async_trait::async_trait;

#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Load stored preferences. `None` when nothing has been saved yet.
    async fn load(&self) -> ApplicationResult<Option<SearchPreferences>>;

    async fn save(&self, preferences: &SearchPreferences) -> ApplicationResult<()>;
}
