use crate::application::ports::navigation::{NavigationIntent, Navigator};
use std::sync::{Mutex, PoisonError};

/// Navigation history kept in memory. Pushes append, replaces overwrite the
/// current entry.
#[derive(Default)]
pub struct InMemoryHistory {
    entries: Mutex<Vec<NavigationIntent>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<NavigationIntent> {
        self.lock().last().cloned()
    }

    pub fn entries(&self) -> Vec<NavigationIntent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Pop the current entry and return the one before it.
    pub fn back(&self) -> Option<NavigationIntent> {
        let mut entries = self.lock();
        entries.pop();
        entries.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<NavigationIntent>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for InMemoryHistory {
    fn navigate(&self, intent: NavigationIntent) {
        let mut entries = self.lock();
        if intent.replace {
            entries.pop();
        }
        entries.push(intent);
    }
}
