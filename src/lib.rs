//! Search state for the CLOMonitor dashboard: URL query codec, filter
//! chips, preference handling and a fetch orchestrator that only ever
//! commits the latest response.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
