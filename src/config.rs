// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    api_url: String,
    http_timeout: Duration,
    preferences_path: PathBuf,
    anchor_poll_interval: Duration,
    anchor_poll_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_api_url() -> String {
    "https://clomonitor.io/api".into()
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from(".clomonitor").join("preferences.json")
}

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_ANCHOR_POLL_INTERVAL_MS: u64 = 100;
const DEFAULT_ANCHOR_POLL_TIMEOUT_MS: u64 = 2000;

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("CLOMONITOR_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_api_url);
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "CLOMONITOR_API_URL must be an http(s) URL, got {api_url}"
            )));
        }

        let http_timeout = Duration::from_secs(positive(
            &lookup,
            "HTTP_TIMEOUT_SECONDS",
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?);
        let anchor_poll_interval = Duration::from_millis(positive(
            &lookup,
            "ANCHOR_POLL_INTERVAL_MS",
            DEFAULT_ANCHOR_POLL_INTERVAL_MS,
        )?);
        let anchor_poll_timeout = Duration::from_millis(positive(
            &lookup,
            "ANCHOR_POLL_TIMEOUT_MS",
            DEFAULT_ANCHOR_POLL_TIMEOUT_MS,
        )?);

        let preferences_path = lookup("PREFERENCES_PATH")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_preferences_path, PathBuf::from);

        Ok(Self {
            api_url,
            http_timeout,
            preferences_path,
            anchor_poll_interval,
            anchor_poll_timeout,
        })
    }

    /// Base URL of the CLOMonitor API, without the trailing endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }

    /// Where search preferences are persisted between runs.
    pub fn preferences_path(&self) -> &std::path::Path {
        &self.preferences_path
    }

    pub fn anchor_poll_interval(&self) -> Duration {
        self.anchor_poll_interval
    }

    pub fn anchor_poll_timeout(&self) -> Duration {
        self.anchor_poll_timeout
    }
}

fn positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}
