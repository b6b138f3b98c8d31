// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod preferences;
pub mod search_api;
pub mod viewport;

pub use preferences::InMemoryPreferencesRepo;
pub use search_api::{GatedSearchApi, StubSearchApi};
pub use viewport::RecordingViewport;
