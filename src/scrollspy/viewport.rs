use yew::Callback;

use super::SectionId;

/// Geometry of the scrolling viewport and the section anchors inside it.
pub trait Viewport {
    /// Returns the current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;

    /// Returns the distance of the anchor for `id` from the top of the document, or `None` if
    /// the document has no such anchor.
    fn section_top(&self, id: &SectionId) -> Option<f64>;

    /// Starts a smooth scroll that aligns the anchor for `id` with the top of the viewport.
    /// Returns `false` without scrolling if the document has no such anchor.
    fn scroll_to(&self, id: &SectionId) -> bool;
}

/// A source of scroll notifications.
///
/// Subscribing returns an owned handle; the callback is invoked on every scroll event until
/// the handle is dropped.
pub trait ScrollSource {
    type Subscription;

    fn subscribe(&self, callback: Callback<()>) -> Self::Subscription;
}
