use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::search::filters::FilterSelection;
use chrono::NaiveDate;
use std::fmt;

/// One-based results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    pub fn new(page: u32) -> DomainResult<Self> {
        if page == 0 {
            Err(DomainError::validation("page number must be positive"))
        } else {
            Ok(Self(page))
        }
    }

    /// Parse the leading integer of `raw`, falling back to the first page
    /// when there is none or it is zero.
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());

        unsigned[..end]
            .parse::<u32>()
            .ok()
            .and_then(|page| Self::new(page).ok())
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

/// Everything the search URL carries. Sort and page size are preferences and
/// live outside the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub text: Option<String>,
    pub accepted_from: Option<NaiveDate>,
    pub accepted_to: Option<NaiveDate>,
    pub filters: FilterSelection,
    pub page: PageNumber,
}

impl SearchCriteria {
    /// Whether any filter or accepted-date bound is active.
    pub fn has_constraints(&self) -> bool {
        !self.filters.is_empty() || self.accepted_from.is_some() || self.accepted_to.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }

    pub fn with_page(mut self, page: PageNumber) -> Self {
        self.page = page;
        self
    }
}
