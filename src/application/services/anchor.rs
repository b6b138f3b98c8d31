// src/application/services/anchor.rs
use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::application::ports::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorScrollStatus {
    /// The anchor showed up and the viewport was scrolled to this offset.
    Scrolled(f64),
    TimedOut,
}

/// Waits for an anchor element to be laid out and scrolls to it.
///
/// Layout readiness is not observable from here, so the viewport is polled at
/// a fixed interval until the anchor appears or the timeout elapses.
#[derive(Clone)]
pub struct AnchorScroller {
    viewport: Arc<dyn Viewport>,
    interval: Duration,
    timeout: Duration,
}

impl AnchorScroller {
    pub fn new(viewport: Arc<dyn Viewport>, interval: Duration, timeout: Duration) -> Self {
        Self {
            viewport,
            interval,
            timeout,
        }
    }

    /// Start polling for `anchor`. Dropping the returned guard stops it.
    pub fn start(&self, anchor: impl Into<String>) -> AnchorScrollGuard {
        let anchor = anchor.into();
        let viewport = Arc::clone(&self.viewport);
        let interval = self.interval;
        let timeout = self.timeout;

        let handle = tokio::spawn(async move {
            let poll = async {
                let mut ticker = tokio::time::interval(interval);
                loop {
                    ticker.tick().await;
                    if let Some(offset) = viewport.anchor_offset(&anchor) {
                        viewport.scroll_to(offset);
                        return offset;
                    }
                }
            };

            match tokio::time::timeout(timeout, poll).await {
                Ok(offset) => {
                    tracing::debug!(anchor = %anchor, offset, "scrolled to anchor");
                    AnchorScrollStatus::Scrolled(offset)
                }
                Err(_) => {
                    tracing::debug!(anchor = %anchor, ?timeout, "anchor never appeared");
                    AnchorScrollStatus::TimedOut
                }
            }
        });

        AnchorScrollGuard {
            handle: Some(handle),
        }
    }
}

/// Owns a running anchor poll and aborts it on drop.
pub struct AnchorScrollGuard {
    handle: Option<JoinHandle<AnchorScrollStatus>>,
}

impl AnchorScrollGuard {
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the poll to finish. `None` if it was aborted.
    pub async fn wait(mut self) -> Option<AnchorScrollStatus> {
        let handle = self.handle.take()?;
        handle.await.ok()
    }
}

impl Drop for AnchorScrollGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
