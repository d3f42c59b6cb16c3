//! Scroll-spy navigation state.
//!
//! [`ScrollSpy`] derives the active section of the page from the scroll position and moves
//! the viewport on explicit navigation. It does not touch the DOM itself: geometry and
//! scrolling go through the [`Viewport`] trait and scroll notifications through
//! [`ScrollSource`], which lets the logic run outside the browser.
mod section;
mod tracker;
mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use section::{Section, SectionId, SectionRegistry};
pub use tracker::{active_section, ScrollTracker};
pub use viewport::{ScrollSource, Viewport};

use std::rc::Rc;

use thiserror::Error;

/// An error in the section configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no sections registered")]
    EmptyRegistry,
    #[error("invalid section id: {0:?}")]
    InvalidId(SectionId),
    #[error("duplicate section id: {0}")]
    DuplicateSection(SectionId),
}

/// The navigation state of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    registry: Rc<SectionRegistry>,
    /// Position of the active section in `registry`.
    active: usize,
    menu_open: bool,
    header_offset: f64,
}

impl ScrollSpy {
    /// Creates a new `ScrollSpy` with the first section active and the menu closed.
    ///
    /// `header_offset` is added to the scroll offset before comparing it against section
    /// tops, so a section counts as reached once it slides under the fixed header.
    pub fn new(registry: Rc<SectionRegistry>, header_offset: f64) -> Self {
        Self {
            registry,
            active: 0,
            menu_open: false,
            header_offset,
        }
    }

    /// Replaces the registry and header offset. The active section is kept if `registry`
    /// contains it and falls back to the first section otherwise. The menu state is kept.
    pub fn reconfigure(&mut self, registry: Rc<SectionRegistry>, header_offset: f64) {
        let active = registry.position(self.active().id.as_str()).unwrap_or(0);

        self.registry = registry;
        self.active = active;
        self.header_offset = header_offset;
    }

    #[inline]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Returns the currently active section.
    #[inline]
    pub fn active(&self) -> &Section {
        // `active` is only ever set from registry positions.
        self.registry.get(self.active).unwrap_or_else(|| self.registry.first())
    }

    #[inline]
    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active().id == *id
    }

    #[inline]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Opens the mobile navigation menu if it is closed and closes it otherwise.
    #[inline]
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the mobile navigation menu. Returns `true` if the menu was open.
    #[inline]
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Recomputes the active section from the current scroll offset of `viewport`.
    ///
    /// The active section becomes the last section in document order whose top does not
    /// exceed `scroll_offset + header_offset`. If no section has been reached the active
    /// section is left as is. Returns `true` if the active section changed.
    pub fn track<V>(&mut self, viewport: &V) -> bool
    where
        V: Viewport + ?Sized,
    {
        let effective_offset = viewport.scroll_offset() + self.header_offset;

        let tops = self
            .registry
            .iter()
            .map(|section| viewport.section_top(&section.id));

        match active_section(tops, effective_offset) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    /// Scrolls `viewport` to the section `id`, marks it active and closes the menu.
    ///
    /// The section becomes active immediately, before the smooth scroll completes. Nothing
    /// happens if `id` is not registered or the document has no anchor for it. Returns
    /// `true` if the navigation happened.
    pub fn navigate<V>(&mut self, viewport: &V, id: &str) -> bool
    where
        V: Viewport + ?Sized,
    {
        let (index, section) = match self.registry.lookup(id) {
            Some(entry) => entry,
            None => {
                log::debug!("Ignoring navigation to unknown section {:?}", id);
                return false;
            }
        };

        if !viewport.scroll_to(&section.id) {
            log::debug!("Ignoring navigation to section {:?} without anchor", id);
            return false;
        }

        self.active = index;
        self.close_menu();
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::Callback;

    use super::testing::{FakeViewport, ManualScroll};
    use super::{ScrollSpy, ScrollTracker, SectionId, SectionRegistry};

    const HEADER_OFFSET: f64 = 100.0;

    fn registry() -> Rc<SectionRegistry> {
        Rc::new(
            SectionRegistry::from_table(&[
                ("home", "Home"),
                ("overview", "Overview"),
                ("format", "Format"),
            ])
            .unwrap(),
        )
    }

    fn viewport() -> FakeViewport {
        FakeViewport::new(&[("home", 0.0), ("overview", 800.0), ("format", 1600.0)])
    }

    fn active(spy: &ScrollSpy) -> &str {
        spy.active().id.as_str()
    }

    #[test]
    fn test_scroll_spy_new() {
        let spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        assert_eq!(active(&spy), "home");
        assert!(spy.is_active(&SectionId::from("home")));
        assert!(!spy.is_menu_open());
    }

    #[test]
    fn test_scroll_spy_track() {
        let viewport = viewport();
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        viewport.set_offset(750.0);
        assert!(spy.track(&viewport));
        assert_eq!(active(&spy), "overview");

        // Same section, no change reported.
        viewport.set_offset(760.0);
        assert!(!spy.track(&viewport));
        assert_eq!(active(&spy), "overview");

        viewport.set_offset(699.0);
        assert!(spy.track(&viewport));
        assert_eq!(active(&spy), "home");

        viewport.set_offset(1500.0);
        assert!(spy.track(&viewport));
        assert_eq!(active(&spy), "format");

        viewport.set_offset(5000.0);
        assert!(!spy.track(&viewport));
        assert_eq!(active(&spy), "format");
    }

    #[test]
    fn test_scroll_spy_track_negative_offset() {
        let viewport = viewport();
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);
        spy.navigate(&viewport, "format");

        // Overscroll above the document top reaches no section.
        viewport.set_offset(-250.0);
        assert!(!spy.track(&viewport));
        assert_eq!(active(&spy), "format");

        viewport.set_offset(-100.0);
        assert!(spy.track(&viewport));
        assert_eq!(active(&spy), "home");
    }

    #[test]
    fn test_scroll_spy_track_nan_offset() {
        let viewport = viewport();
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        viewport.set_offset(900.0);
        spy.track(&viewport);

        viewport.set_offset(f64::NAN);
        assert!(!spy.track(&viewport));
        assert_eq!(active(&spy), "overview");
    }

    #[test]
    fn test_scroll_spy_track_all_offsets() {
        let viewport = viewport();
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        for offset in (0..2500).step_by(25) {
            let offset = offset as f64;
            viewport.set_offset(offset);
            spy.track(&viewport);

            let expected = if offset + HEADER_OFFSET >= 1600.0 {
                "format"
            } else if offset + HEADER_OFFSET >= 800.0 {
                "overview"
            } else {
                "home"
            };

            assert_eq!(active(&spy), expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_scroll_spy_track_above_first() {
        let viewport = FakeViewport::new(&[("home", 400.0), ("overview", 800.0)]);
        let registry = Rc::new(
            SectionRegistry::from_table(&[("home", "Home"), ("overview", "Overview")]).unwrap(),
        );
        let mut spy = ScrollSpy::new(registry, HEADER_OFFSET);

        viewport.set_offset(900.0);
        spy.track(&viewport);
        assert_eq!(active(&spy), "overview");

        // Above the first section the last active section is kept.
        viewport.set_offset(0.0);
        assert!(!spy.track(&viewport));
        assert_eq!(active(&spy), "overview");
    }

    #[test]
    fn test_scroll_spy_track_missing_anchor() {
        let viewport = FakeViewport::new(&[("home", 0.0), ("format", 1600.0)]);
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        viewport.set_offset(1000.0);
        assert!(!spy.track(&viewport));
        assert_eq!(active(&spy), "home");

        viewport.set_offset(1500.0);
        assert!(spy.track(&viewport));
        assert_eq!(active(&spy), "format");
    }

    #[test]
    fn test_scroll_spy_navigate() {
        let viewport = viewport();
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        // The viewport has not moved yet, but the target is active immediately.
        assert!(spy.navigate(&viewport, "format"));
        assert_eq!(active(&spy), "format");
        assert_eq!(viewport.scrolled_to(), [SectionId::from("format")]);

        assert!(spy.navigate(&viewport, "overview"));
        assert_eq!(active(&spy), "overview");
    }

    #[test]
    fn test_scroll_spy_navigate_unknown() {
        let viewport = viewport();
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);
        spy.navigate(&viewport, "overview");
        spy.toggle_menu();

        assert!(!spy.navigate(&viewport, "prizes"));
        assert!(!spy.navigate(&viewport, ""));
        assert_eq!(active(&spy), "overview");
        assert!(spy.is_menu_open());
        assert_eq!(viewport.scrolled_to(), [SectionId::from("overview")]);
    }

    #[test]
    fn test_scroll_spy_navigate_missing_anchor() {
        let viewport = FakeViewport::new(&[("home", 0.0)]);
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        assert!(!spy.navigate(&viewport, "format"));
        assert_eq!(active(&spy), "home");
        assert!(viewport.scrolled_to().is_empty());
    }

    #[test]
    fn test_scroll_spy_reconfigure() {
        let viewport = viewport();
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);
        spy.navigate(&viewport, "overview");
        spy.toggle_menu();

        spy.reconfigure(registry(), 0.0);
        assert_eq!(active(&spy), "overview");
        assert!(spy.is_menu_open());

        // With no header offset the section is reached only once its top is at the
        // viewport top.
        viewport.set_offset(1550.0);
        assert!(!spy.track(&viewport));
        viewport.set_offset(1600.0);
        assert!(spy.track(&viewport));
        assert_eq!(active(&spy), "format");

        let smaller = Rc::new(
            SectionRegistry::from_table(&[("home", "Home"), ("overview", "Overview")]).unwrap(),
        );
        spy.reconfigure(smaller, HEADER_OFFSET);
        assert_eq!(active(&spy), "home");
        assert_eq!(spy.registry().len(), 2);
    }

    #[test]
    fn test_scroll_spy_toggle_menu() {
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        spy.toggle_menu();
        assert!(spy.is_menu_open());
        spy.toggle_menu();
        assert!(!spy.is_menu_open());

        assert!(!spy.close_menu());
        spy.toggle_menu();
        assert!(spy.close_menu());
        assert!(!spy.is_menu_open());
    }

    #[test]
    fn test_scroll_spy_navigate_closes_menu() {
        let viewport = viewport();
        let mut spy = ScrollSpy::new(registry(), HEADER_OFFSET);

        spy.toggle_menu();
        spy.navigate(&viewport, "format");
        assert!(!spy.is_menu_open());

        spy.navigate(&viewport, "home");
        assert!(!spy.is_menu_open());
    }

    #[test]
    fn test_scroll_spy_subscription() {
        let source = ManualScroll::default();
        let viewport = Rc::new(viewport());
        let spy = Rc::new(RefCell::new(ScrollSpy::new(registry(), HEADER_OFFSET)));

        let mut tracker = ScrollTracker::detached();
        tracker.attach(&source, {
            let spy = spy.clone();
            let viewport = viewport.clone();
            Callback::from(move |()| {
                spy.borrow_mut().track(&*viewport);
            })
        });

        viewport.set_offset(900.0);
        source.scroll();
        assert_eq!(active(&spy.borrow()), "overview");

        tracker.detach();

        viewport.set_offset(1800.0);
        source.scroll();
        assert_eq!(active(&spy.borrow()), "overview");
    }
}
