// tests/support/mocks/viewport.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use clomonitor_search::application::ports::viewport::Viewport;

/// Records scrolls. Anchors can be made to appear after a number of polls.
#[derive(Default)]
pub struct RecordingViewport {
    scrolls: Mutex<Vec<f64>>,
    anchors: Mutex<HashMap<String, (u32, f64)>>,
    polls: AtomicU32,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.lock().unwrap().clone()
    }

    pub fn last_scroll(&self) -> Option<f64> {
        self.scrolls.lock().unwrap().last().copied()
    }

    /// `anchor` is reported at `offset` once it has been polled `polls` times.
    pub fn anchor_ready_after(&self, anchor: &str, polls: u32, offset: f64) {
        self.anchors
            .lock()
            .unwrap()
            .insert(anchor.to_string(), (polls, offset));
    }

    pub fn polls(&self) -> u32 {
        self.polls.load(Ordering::SeqCst)
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to(&self, offset: f64) {
        self.scrolls.lock().unwrap().push(offset);
    }

    fn anchor_offset(&self, anchor: &str) -> Option<f64> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let mut anchors = self.anchors.lock().unwrap();
        let (remaining, offset) = anchors.get_mut(anchor)?;
        if *remaining == 0 {
            Some(*offset)
        } else {
            *remaining -= 1;
            None
        }
    }
}
