use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("0", "App definition"),
    ("1", "Observability"),
    ("2", "Orchestration"),
    ("3", "Platform"),
    ("4", "Provisioning"),
    ("5", "Runtime"),
    ("6", "Serverless"),
];

const MATURITY_OPTIONS: &[(&str, &str)] = &[
    ("0", "Graduated"),
    ("1", "Incubating"),
    ("2", "Sandbox"),
];

const RATING_OPTIONS: &[(&str, &str)] = &[
    ("a", "A [75-100]"),
    ("b", "B [50-74]"),
    ("c", "C [25-49]"),
    ("d", "D [0-24]"),
];

/// Facets results can be narrowed by. Each one is a repeatable key in the
/// search URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Category,
    Maturity,
    Rating,
}

impl FilterCategory {
    pub const ALL: [Self; 3] = [Self::Category, Self::Maturity, Self::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Maturity => "maturity",
            Self::Rating => "rating",
        }
    }

    /// Resolve a query-string key. Only whitelisted keys are filters.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == key)
    }

    /// Valid `(value, label)` pairs for this facet, in display order.
    pub fn options(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Category => CATEGORY_OPTIONS,
            Self::Maturity => MATURITY_OPTIONS,
            Self::Rating => RATING_OPTIONS,
        }
    }

    /// Display label for `value`; unknown values are shown verbatim.
    pub fn label_for<'a>(&self, value: &'a str) -> &'a str {
        self.options()
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map_or(value, |(_, label)| *label)
    }

    /// Whether the search API expects integer identifiers for this facet.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Category | Self::Maturity)
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::from_key(s)
            .ok_or_else(|| DomainError::validation(format!("unknown filter category: {s}")))
    }
}

/// Selected values per filter category.
///
/// Categories iterate in a fixed order; values keep the order they were
/// added in. A category whose last value is removed disappears entirely.
/// Equality ignores value order within a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelection(BTreeMap<FilterCategory, Vec<String>>);

impl PartialEq for FilterSelection {
    fn eq(&self, other: &Self) -> bool {
        FilterCategory::ALL
            .iter()
            .all(|&category| sorted(self.values(category)) == sorted(other.values(category)))
    }
}

impl Eq for FilterSelection {}

fn sorted(values: &[String]) -> Vec<&str> {
    let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
    values.sort_unstable();
    values
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn values(&self, category: FilterCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, category: FilterCategory, value: &str) -> bool {
        self.values(category).iter().any(|v| v == value)
    }

    pub fn has_category(&self, category: FilterCategory) -> bool {
        self.0.contains_key(&category)
    }

    /// Append without deduplicating. Used when decoding repeated keys.
    pub fn push(&mut self, category: FilterCategory, value: impl Into<String>) {
        self.0.entry(category).or_default().push(value.into());
    }

    /// Add `value` unless it is already selected. Returns whether it was added.
    pub fn insert(&mut self, category: FilterCategory, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(category, &value) {
            return false;
        }
        self.push(category, value);
        true
    }

    /// Remove every occurrence of `value`. Returns whether anything changed.
    pub fn remove(&mut self, category: FilterCategory, value: &str) -> bool {
        let Some(values) = self.0.get_mut(&category) else {
            return false;
        };
        let before = values.len();
        values.retain(|v| v != value);
        let changed = values.len() != before;
        if values.is_empty() {
            self.0.remove(&category);
        }
        changed
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of selected `(category, value)` pairs.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterCategory, &str)> + '_ {
        self.0
            .iter()
            .flat_map(|(category, values)| values.iter().map(move |v| (*category, v.as_str())))
    }
}

impl<V: Into<String>> FromIterator<(FilterCategory, V)> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = (FilterCategory, V)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (category, value) in iter {
            selection.push(category, value);
        }
        selection
    }
}
