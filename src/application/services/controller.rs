// src/application/services/controller.rs
use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    application::{
        dto::SearchRequest,
        ports::navigation::{NavigationIntent, Navigator, SEARCH_PATH},
        services::{chips::ChipRemoval, preferences::PreferencesStore},
    },
    domain::search::{
        FilterCategory, PageNumber, PageSize, SearchCriteria, SearchPreferences, SortOptions,
        query_string,
    },
};

/// Owns the criteria decoded from the current location and turns user
/// actions into navigations.
///
/// User actions never mutate the criteria directly: they encode the desired
/// criteria and navigate, and the new location is fed back through
/// [`SearchStateController::sync_from_location`].
pub struct SearchStateController {
    criteria: SearchCriteria,
    preferences: Arc<PreferencesStore>,
    navigator: Arc<dyn Navigator>,
    scroll_position: Option<f64>,
}

impl SearchStateController {
    pub fn new(preferences: Arc<PreferencesStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            criteria: SearchCriteria::default(),
            preferences,
            navigator,
            scroll_position: None,
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn preferences(&self) -> SearchPreferences {
        self.preferences.get()
    }

    /// Scroll offset to restore once the next fetch completes.
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position.unwrap_or(0.0)
    }

    /// Remember where the user was before leaving for a project page.
    pub fn save_scroll_position(&mut self, offset: f64) {
        self.scroll_position = Some(offset);
    }

    /// Replace the criteria with those decoded from `query`. Returns whether
    /// they changed.
    pub fn sync_from_location(&mut self, query: &str) -> bool {
        self.apply_criteria(query_string::decode(query))
    }

    pub(crate) fn apply_criteria(&mut self, criteria: SearchCriteria) -> bool {
        if self.criteria == criteria {
            return false;
        }
        self.criteria = criteria;
        true
    }

    /// Drop filters and date bounds, keeping the search text.
    pub fn reset_filters(&mut self) -> NavigationIntent {
        let criteria = SearchCriteria {
            text: self.criteria.text.clone(),
            ..SearchCriteria::default()
        };
        self.navigate_to(&criteria, false)
    }

    /// Navigate to the unfiltered listing.
    pub fn browse_all(&mut self) -> NavigationIntent {
        self.navigate_to(&SearchCriteria::default(), false)
    }

    pub fn toggle_filter(
        &mut self,
        category: FilterCategory,
        value: &str,
        selected: bool,
    ) -> NavigationIntent {
        let mut criteria = self.first_page();
        if selected {
            criteria.filters.insert(category, value);
        } else {
            criteria.filters.remove(category, value);
        }
        self.navigate_to(&criteria, false)
    }

    pub fn set_accepted_range(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> NavigationIntent {
        let criteria = SearchCriteria {
            accepted_from: from,
            accepted_to: to,
            ..self.first_page()
        };
        self.navigate_to(&criteria, false)
    }

    pub fn set_page(&mut self, page: PageNumber) -> NavigationIntent {
        let criteria = self.criteria.clone().with_page(page);
        self.navigate_to(&criteria, false)
    }

    pub fn set_page_size(&mut self, limit: PageSize) -> NavigationIntent {
        let criteria = self.first_page();
        let intent = self.navigate_to(&criteria, true);
        self.preferences.update_limit(limit);
        intent
    }

    pub fn set_sort(&mut self, sort: SortOptions) -> NavigationIntent {
        let criteria = self.first_page();
        let intent = self.navigate_to(&criteria, true);
        self.preferences.update_sort(sort);
        intent
    }

    /// Run the removal action attached to a filter chip.
    pub fn remove_chip(&mut self, removal: &ChipRemoval) -> NavigationIntent {
        match removal {
            ChipRemoval::Filter { category, value } => self.toggle_filter(*category, value, false),
            ChipRemoval::AcceptedRange => self.set_accepted_range(None, None),
        }
    }

    /// Encoded current criteria, for links that lead back to these results.
    pub fn current_query_string(&self) -> String {
        query_string::encode(&self.criteria)
    }

    pub fn remote_query_payload(&self) -> SearchRequest {
        SearchRequest::from_criteria(&self.criteria, &self.preferences.get())
    }

    fn first_page(&self) -> SearchCriteria {
        self.criteria.clone().with_page(PageNumber::FIRST)
    }

    fn navigate_to(&mut self, criteria: &SearchCriteria, replace: bool) -> NavigationIntent {
        self.scroll_position = Some(0.0);
        let search = query_string::encode(criteria);
        let intent = if replace {
            NavigationIntent::replace(SEARCH_PATH, search)
        } else {
            NavigationIntent::push(SEARCH_PATH, search)
        };
        tracing::debug!(href = %intent, replace, "navigating");
        self.navigator.navigate(intent.clone());
        intent
    }
}
