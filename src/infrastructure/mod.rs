pub mod history;
pub mod http_search_api;
pub mod preferences_file;
pub mod viewport;

pub use history::InMemoryHistory;
pub use http_search_api::{HttpSearchApi, SearchApiError};
pub use preferences_file::JsonFilePreferencesRepository;
pub use viewport::HeadlessViewport;
