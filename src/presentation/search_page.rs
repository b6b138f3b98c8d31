// src/presentation/search_page.rs
use serde::Serialize;

use crate::{
    application::{
        dto::PageWindow,
        services::{FilterChip, FilterChipPresenter, ResultsSnapshot},
    },
    domain::{
        project::Project,
        search::{SearchCriteria, SearchPreferences},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyStateAction {
    ResetFilters,
    BrowseAll,
}

/// Shown instead of the result list when a search matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub action: EmptyStateAction,
}

impl EmptyState {
    fn for_criteria(criteria: &SearchCriteria) -> Self {
        let mut message =
            String::from("We can't seem to find any projects that match your search");
        if let Some(text) = criteria.text() {
            message.push_str(&format!(" for \"{text}\""));
        }
        let action = if criteria.filters.is_empty() {
            message.push('.');
            EmptyStateAction::BrowseAll
        } else {
            message.push_str(" with the selected filters");
            EmptyStateAction::ResetFilters
        };
        Self { message, action }
    }

    pub fn action_label(&self) -> &'static str {
        match self.action {
            EmptyStateAction::ResetFilters => "reset the filters",
            EmptyStateAction::BrowseAll => "browse all projects",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub maturity: Option<String>,
    pub category: Option<String>,
    pub rating: Option<String>,
    pub score: Option<f64>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            title: project.title().to_string(),
            description: project.description.clone(),
            maturity: project.maturity_label(),
            category: project.category_label(),
            rating: project.rating_label().map(str::to_owned),
            score: project.score.as_ref().map(|score| score.global),
        }
    }
}

/// Everything needed to draw the search page for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPageView {
    pub status_line: String,
    pub chips: Vec<FilterChip>,
    /// Whether the "Reset" filters control is offered.
    pub show_reset: bool,
    /// `None` until a search has completed.
    pub cards: Option<Vec<ProjectCard>>,
    pub empty_state: Option<EmptyState>,
    pub pagination: PageWindow,
    /// Results are stale while a new search is in flight.
    pub dimmed: bool,
    pub error: Option<String>,
}

impl SearchPageView {
    pub fn build(
        criteria: &SearchCriteria,
        preferences: &SearchPreferences,
        snapshot: &ResultsSnapshot,
    ) -> Self {
        let pagination = PageWindow::new(criteria.page, preferences.limit, snapshot.total_count());
        let cards = snapshot
            .results
            .as_ref()
            .map(|page| page.items.iter().map(ProjectCard::from).collect::<Vec<_>>());
        let empty_state = cards
            .as_ref()
            .filter(|cards| cards.is_empty())
            .map(|_| EmptyState::for_criteria(criteria));

        Self {
            status_line: status_line(criteria, &pagination),
            chips: FilterChipPresenter::present(criteria),
            show_reset: criteria.has_constraints(),
            cards,
            empty_state,
            pagination,
            dimmed: snapshot.is_loading,
            error: snapshot.last_error.clone(),
        }
    }
}

fn status_line(criteria: &SearchCriteria, pagination: &PageWindow) -> String {
    let mut line = match pagination.range() {
        Some((first, last)) => format!("{first} - {last} of {} results", pagination.total),
        None => format!("{} results", pagination.total),
    };
    if let Some(text) = criteria.text() {
        line.push_str(&format!(" for \"{text}\""));
    }
    line
}
