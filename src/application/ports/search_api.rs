// src/application/ports/search_api.rs
use crate::application::{ApplicationResult, dto::SearchRequest};
use crate::domain::project::ResultsPage;
use async_trait::async_trait;

#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Run a search and return the requested page plus the total match count.
    async fn search(&self, request: &SearchRequest) -> ApplicationResult<ResultsPage>;
}
