// src/domain/project.rs
use crate::domain::search::FilterCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectScore {
    pub global: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal: Option<f64>,
}

/// A project as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub devstats_url: Option<String>,
    /// Seconds since the epoch.
    #[serde(default)]
    pub accepted_at: Option<i64>,
    #[serde(default)]
    pub maturity: Option<i64>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub score: Option<ProjectScore>,
    /// Seconds since the epoch.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Project {
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }

    pub fn maturity_label(&self) -> Option<String> {
        self.maturity
            .map(|id| FilterCategory::Maturity.label_for(&id.to_string()).to_owned())
    }

    pub fn category_label(&self) -> Option<String> {
        self.category
            .map(|id| FilterCategory::Category.label_for(&id.to_string()).to_owned())
    }

    pub fn rating_label(&self) -> Option<&str> {
        self.rating
            .as_deref()
            .map(|rating| FilterCategory::Rating.label_for(rating))
    }

    pub fn accepted_at(&self) -> Option<DateTime<Utc>> {
        self.accepted_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// One committed page of results. Superseded wholesale by the next fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsPage {
    pub items: Vec<Project>,
    pub total_count: u64,
}

impl ResultsPage {
    pub fn new(items: Vec<Project>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
