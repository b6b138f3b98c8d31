// src/application/services/mod.rs
pub mod anchor;
pub mod chips;
pub mod controller;
pub mod orchestrator;
pub mod preferences;
pub mod session;

pub use anchor::{AnchorScrollGuard, AnchorScrollStatus, AnchorScroller};
pub use chips::{ChipRemoval, FilterChip, FilterChipPresenter, accepted_range_label};
pub use controller::SearchStateController;
pub use orchestrator::{FetchOutcome, ResultsFetchOrchestrator, ResultsSnapshot};
pub use preferences::PreferencesStore;
pub use session::SearchSession;
