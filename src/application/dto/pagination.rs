use crate::domain::search::{PageNumber, PageSize};
use serde::Serialize;

/// Where the active page sits inside the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub active: u32,
    pub limit: u32,
    pub total: u64,
}

impl PageWindow {
    pub fn new(active: PageNumber, limit: PageSize, total: u64) -> Self {
        Self {
            active: active.get(),
            limit: limit.get(),
            total,
        }
    }

    /// One-based inclusive range of results shown, or `None` when there are none.
    pub fn range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let limit = u64::from(self.limit);
        let first = u64::from(self.active.saturating_sub(1)) * limit + 1;
        let last = self.total.min(limit * u64::from(self.active));
        Some((first, last))
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.limit.max(1)))
    }
}
