// src/application/ports/navigation.rs
use std::fmt;

pub const SEARCH_PATH: &str = "/search";

/// A pending location change built from a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub pathname: String,
    /// Encoded query string including the leading `?`.
    pub search: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigationIntent {
    pub fn push(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
            replace: false,
        }
    }

    pub fn replace(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            replace: true,
            ..Self::push(pathname, search)
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search)
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}
