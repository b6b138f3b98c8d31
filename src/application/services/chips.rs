// src/application/services/chips.rs
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::search::{FilterCategory, SearchCriteria};

pub const ACCEPTED_CHIP_NAME: &str = "accepted";

/// What removing a chip does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChipRemoval {
    /// Deselect one filter value.
    Filter {
        category: FilterCategory,
        value: String,
    },
    /// Clear both accepted-date bounds.
    AcceptedRange,
}

/// One removable token describing an active constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    /// Facet name shown before the label, e.g. `maturity`.
    pub name: String,
    pub label: String,
    pub removal: ChipRemoval,
}

impl FilterChip {
    /// Accessible name of the chip's remove button.
    pub fn remove_label(&self) -> String {
        match self.removal {
            ChipRemoval::AcceptedRange => format!("Remove {ACCEPTED_CHIP_NAME} filter"),
            ChipRemoval::Filter { .. } => format!("Remove {} filter", self.label),
        }
    }
}

pub struct FilterChipPresenter;

impl FilterChipPresenter {
    /// Chips for every active constraint: the accepted range first, then one
    /// per selected filter value. Empty when nothing is active.
    pub fn present(criteria: &SearchCriteria) -> Vec<FilterChip> {
        let accepted = accepted_range_label(criteria.accepted_from, criteria.accepted_to).map(
            |label| FilterChip {
                name: ACCEPTED_CHIP_NAME.to_string(),
                label,
                removal: ChipRemoval::AcceptedRange,
            },
        );

        let filters = criteria.filters.iter().map(|(category, value)| FilterChip {
            name: category.as_str().to_string(),
            label: category.label_for(value).to_string(),
            removal: ChipRemoval::Filter {
                category,
                value: value.to_string(),
            },
        });

        accepted.into_iter().chain(filters).collect()
    }
}

/// Year-based summary of the accepted-date bounds.
pub fn accepted_range_label(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<String> {
    match (from.map(|d| d.year()), to.map(|d| d.year())) {
        (Some(from), Some(to)) if from == to => Some(from.to_string()),
        (Some(from), Some(to)) => Some(format!("{from} - {to}")),
        (Some(from), None) => Some(format!("≥ {from}")),
        (None, Some(to)) => Some(format!("≤ {to}")),
        (None, None) => None,
    }
}
