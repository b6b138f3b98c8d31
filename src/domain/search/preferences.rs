use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Name,
    Score,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Score => "score",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "score" => Ok(Self::Score),
            other => Err(DomainError::validation(format!("unknown sort field: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::validation(format!(
                "unknown sort direction: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOptions {
    pub by: SortBy,
    pub direction: SortDirection,
}

impl SortOptions {
    pub fn new(by: SortBy, direction: SortDirection) -> Self {
        Self { by, direction }
    }
}

/// Number of results per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    pub const DEFAULT: Self = Self(20);
    /// Sizes offered by the page-size selector.
    pub const OPTIONS: [u32; 3] = [20, 40, 60];

    pub fn new(size: u32) -> DomainResult<Self> {
        if size == 0 {
            Err(DomainError::validation("page size must be positive"))
        } else {
            Ok(Self(size))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for PageSize {
    type Error = DomainError;

    fn try_from(value: u32) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

impl FromStr for PageSize {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let size = s
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::validation(format!("invalid page size: {s}")))?;
        Self::new(size)
    }
}

/// Search settings that survive across searches and never appear in the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPreferences {
    #[serde(default)]
    pub limit: PageSize,
    #[serde(default)]
    pub sort: SortOptions,
}
