//! Browser implementations of [`Viewport`] and [`ScrollSource`].
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};
use yew::Callback;

use crate::scrollspy::{ScrollSource, SectionId, Viewport};

/// The browser window. Section anchors are looked up by their `id` attribute at call time,
/// so anchors rendered after construction are found too.
#[derive(Clone, Debug)]
pub struct DomViewport {
    window: Window,
}

impl DomViewport {
    #[inline]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn anchor(&self, id: &SectionId) -> Option<HtmlElement> {
        self.window
            .document()?
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Default for DomViewport {
    fn default() -> Self {
        Self::new(gloo_utils::window())
    }
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                log::warn!("Failed to read scroll offset: {:?}", err);
                0.0
            }
        }
    }

    fn section_top(&self, id: &SectionId) -> Option<f64> {
        self.anchor(id).map(|elem| elem.offset_top() as f64)
    }

    fn scroll_to(&self, id: &SectionId) -> bool {
        let elem = match self.anchor(id) {
            Some(elem) => elem,
            None => return false,
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        elem.scroll_into_view_with_scroll_into_view_options(&options);

        true
    }
}

/// Scroll events of the browser window.
#[derive(Clone, Debug)]
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    #[inline]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Default for WindowScroll {
    fn default() -> Self {
        Self::new(gloo_utils::window())
    }
}

impl ScrollSource for WindowScroll {
    /// The listener is removed from the window when dropped.
    type Subscription = EventListener;

    fn subscribe(&self, callback: Callback<()>) -> Self::Subscription {
        log::debug!("Subscribing to window scroll events");

        // `EventListener::new` registers a passive listener.
        EventListener::new(&self.window, "scroll", move |_| callback.emit(()))
    }
}
