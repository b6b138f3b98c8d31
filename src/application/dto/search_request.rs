use crate::domain::search::{
    FilterCategory, PageNumber, PageSize, SearchCriteria, SearchPreferences, SortBy,
    SortDirection, query_string::format_date,
};
use serde::Serialize;

/// Outbound search payload derived from the URL criteria and the current
/// preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// ISO `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_from: Option<String>,
    /// ISO `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_to: Option<String>,
    pub category: Vec<i64>,
    pub maturity: Vec<i64>,
    pub rating: Vec<String>,
    pub sort_by: SortBy,
    pub sort_direction: SortDirection,
    pub offset: u64,
    pub limit: u32,
}

impl SearchRequest {
    pub fn from_criteria(criteria: &SearchCriteria, preferences: &SearchPreferences) -> Self {
        Self {
            text: criteria.text().map(str::to_owned),
            accepted_from: criteria.accepted_from.map(format_date),
            accepted_to: criteria.accepted_to.map(format_date),
            category: numeric_ids(criteria, FilterCategory::Category),
            maturity: numeric_ids(criteria, FilterCategory::Maturity),
            rating: criteria.filters.values(FilterCategory::Rating).to_vec(),
            sort_by: preferences.sort.by,
            sort_direction: preferences.sort.direction,
            offset: calculate_offset(criteria.page, preferences.limit),
            limit: preferences.limit.get(),
        }
    }
}

/// Zero-based offset of the first result on `page`.
pub fn calculate_offset(page: PageNumber, limit: PageSize) -> u64 {
    u64::from(page.get().saturating_sub(1)) * u64::from(limit.get())
}

fn numeric_ids(criteria: &SearchCriteria, category: FilterCategory) -> Vec<i64> {
    criteria
        .filters
        .values(category)
        .iter()
        .filter_map(|raw| match raw.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(%category, value = %raw, "dropping non-numeric filter value");
                None
            }
        })
        .collect()
}
