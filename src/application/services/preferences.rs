// src/application/services/preferences.rs
use crate::domain::search::{PageSize, SearchPreferences, SortOptions};
use std::sync::{PoisonError, RwLock};

/// Process-wide search preferences, passed explicitly to whoever needs them.
#[derive(Debug, Default)]
pub struct PreferencesStore {
    inner: RwLock<SearchPreferences>,
}

impl PreferencesStore {
    pub fn new(initial: SearchPreferences) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    pub fn get(&self) -> SearchPreferences {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns whether the stored value changed.
    pub fn update_limit(&self, limit: PageSize) -> bool {
        self.update(|prefs| prefs.limit = limit)
    }

    /// Returns whether the stored value changed.
    pub fn update_sort(&self, sort: SortOptions) -> bool {
        self.update(|prefs| prefs.sort = sort)
    }

    pub fn replace(&self, preferences: SearchPreferences) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = preferences;
    }

    fn update(&self, apply: impl FnOnce(&mut SearchPreferences)) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = *guard;
        apply(&mut *guard);
        *guard != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{SortBy, SortDirection};

    #[test]
    fn updates_report_changes() {
        let store = PreferencesStore::default();
        let limit = PageSize::new(40).expect("limit");

        assert!(store.update_limit(limit));
        assert!(!store.update_limit(limit));
        assert!(store.update_sort(SortOptions::new(SortBy::Score, SortDirection::Desc)));

        let prefs = store.get();
        assert_eq!(prefs.limit, limit);
        assert_eq!(prefs.sort.by, SortBy::Score);
    }
}
