// src/application/ports/viewport.rs
pub trait Viewport: Send + Sync {
    /// Scroll the window to the given vertical offset.
    fn scroll_to(&self, offset: f64);

    /// Vertical offset of the element identified by `anchor`, if it is laid out.
    fn anchor_offset(&self, anchor: &str) -> Option<f64>;
}
