// tests/support/mocks/search_api.rs
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use clomonitor_search::application::{
    ApplicationResult, dto::SearchRequest, error::ApplicationError, ports::search_api::SearchApi,
};
use clomonitor_search::domain::project::ResultsPage;
use tokio::sync::oneshot;

/// Answers from a queue of canned responses and records every request.
/// An empty queue answers with an empty page.
#[derive(Default)]
pub struct StubSearchApi {
    responses: Mutex<VecDeque<ApplicationResult<ResultsPage>>>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl StubSearchApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(pages: impl IntoIterator<Item = ResultsPage>) -> Self {
        let api = Self::new();
        for page in pages {
            api.push_ok(page);
        }
        api
    }

    pub fn push_ok(&self, page: ResultsPage) {
        self.responses.lock().unwrap().push_back(Ok(page));
    }

    pub fn push_err(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApplicationError::infrastructure(message)));
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<SearchRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SearchApi for StubSearchApi {
    async fn search(&self, request: &SearchRequest) -> ApplicationResult<ResultsPage> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ResultsPage::default()))
    }
}

/// Each call waits until the test releases the matching gate, so tests
/// control the order in which concurrent requests complete.
#[derive(Default)]
pub struct GatedSearchApi {
    gates: Mutex<VecDeque<oneshot::Receiver<ApplicationResult<ResultsPage>>>>,
}

impl GatedSearchApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the gate for the next call. Calls consume gates in order.
    pub fn gate(&self) -> oneshot::Sender<ApplicationResult<ResultsPage>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }
}

#[async_trait]
impl SearchApi for GatedSearchApi {
    async fn search(&self, _request: &SearchRequest) -> ApplicationResult<ResultsPage> {
        let gate = self.gates.lock().unwrap().pop_front();
        let Some(gate) = gate else {
            return Err(ApplicationError::infrastructure("no gate registered"));
        };
        gate.await
            .unwrap_or_else(|_| Err(ApplicationError::infrastructure("gate dropped")))
    }
}
