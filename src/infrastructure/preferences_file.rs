use crate::{
    application::{
        ApplicationResult, error::ApplicationError, ports::preferences::PreferencesRepository,
    },
    domain::search::SearchPreferences,
};
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};

/// Stores search preferences as a JSON document on disk.
pub struct JsonFilePreferencesRepository {
    path: PathBuf,
}

impl JsonFilePreferencesRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl PreferencesRepository for JsonFilePreferencesRepository {
    async fn load(&self) -> ApplicationResult<Option<SearchPreferences>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(ApplicationError::infrastructure(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )));
            }
        };

        let preferences = serde_json::from_str(&raw).map_err(|err| {
            ApplicationError::validation(format!(
                "invalid preferences file {}: {err}",
                self.path.display()
            ))
        })?;
        Ok(Some(preferences))
    }

    async fn save(&self, preferences: &SearchPreferences) -> ApplicationResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                ApplicationError::infrastructure(format!(
                    "failed to create {}: {err}",
                    parent.display()
                ))
            })?;
        }

        let body = serde_json::to_string_pretty(preferences)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tokio::fs::write(&self.path, body).await.map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to write {}: {err}",
                self.path.display()
            ))
        })?;
        tracing::debug!(path = %self.path.display(), "saved search preferences");
        Ok(())
    }
}
