use crate::application::ports::viewport::Viewport;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Layout {
    offset: f64,
    rows: Vec<String>,
}

/// Viewport for non-graphical front-ends. Each laid-out row is one unit
/// tall, so an anchor's offset is its row index.
#[derive(Default)]
pub struct HeadlessViewport {
    layout: Mutex<Layout>,
}

impl HeadlessViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.lock().offset
    }

    /// Replace the rendered rows, identified by their anchor names.
    pub fn lay_out(&self, rows: impl IntoIterator<Item = String>) {
        self.lock().rows = rows.into_iter().collect();
    }

    fn lock(&self) -> MutexGuard<'_, Layout> {
        self.layout.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Viewport for HeadlessViewport {
    fn scroll_to(&self, offset: f64) {
        tracing::trace!(offset, "scroll");
        self.lock().offset = offset;
    }

    fn anchor_offset(&self, anchor: &str) -> Option<f64> {
        let layout = self.lock();
        let row = layout.rows.iter().position(|row| row == anchor)?;
        u32::try_from(row).ok().map(f64::from)
    }
}
