//! In-memory [`Viewport`] and [`ScrollSource`] for tests.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use yew::Callback;

use super::{ScrollSource, SectionId, Viewport};

/// A viewport with fixed anchor positions. Smooth scrolls are recorded but do not move the
/// viewport; use [`FakeViewport::set_offset`] to simulate scrolling.
#[derive(Debug, Default)]
pub struct FakeViewport {
    offset: Cell<f64>,
    tops: HashMap<&'static str, f64>,
    scrolled_to: RefCell<Vec<SectionId>>,
}

impl FakeViewport {
    pub fn new(tops: &[(&'static str, f64)]) -> Self {
        Self {
            offset: Cell::new(0.0),
            tops: tops.iter().copied().collect(),
            scrolled_to: RefCell::new(Vec::new()),
        }
    }

    pub fn set_offset(&self, offset: f64) {
        self.offset.set(offset);
    }

    pub fn scrolled_to(&self) -> Vec<SectionId> {
        self.scrolled_to.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn section_top(&self, id: &SectionId) -> Option<f64> {
        self.tops.get(id.as_str()).copied()
    }

    fn scroll_to(&self, id: &SectionId) -> bool {
        if !self.tops.contains_key(id.as_str()) {
            return false;
        }

        self.scrolled_to.borrow_mut().push(id.clone());
        true
    }
}

/// A scroll source that fires when [`ManualScroll::scroll`] is called.
#[derive(Default)]
pub struct ManualScroll {
    listeners: RefCell<Vec<Weak<Callback<()>>>>,
}

impl ManualScroll {
    /// Notifies every live subscription.
    pub fn scroll(&self) {
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect();

        for cb in listeners {
            cb.emit(());
        }
    }
}

impl ScrollSource for ManualScroll {
    type Subscription = Rc<Callback<()>>;

    fn subscribe(&self, callback: Callback<()>) -> Self::Subscription {
        let callback = Rc::new(callback);
        self.listeners.borrow_mut().push(Rc::downgrade(&callback));
        callback
    }
}
