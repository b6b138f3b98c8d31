// src/application/ports/mod.rs
pub mod navigation;
pub mod preferences;
pub mod search_api;
pub mod viewport;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type SearchApiPort = dyn search_api::SearchApi;
pub type NavigatorPort = dyn navigation::Navigator;
pub type ViewportPort = dyn viewport::Viewport;
pub type PreferencesRepositoryPort = dyn preferences::PreferencesRepository;
