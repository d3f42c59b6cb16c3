use yew::Callback;

use super::ScrollSource;

/// Returns the position of the last section whose top offset does not exceed
/// `effective_offset`.
///
/// `tops` yields the top offset of every section in document order, `None` for sections
/// without an anchor. Returns `None` if no section has been reached yet.
pub fn active_section<I>(tops: I, effective_offset: f64) -> Option<usize>
where
    I: IntoIterator<Item = Option<f64>>,
{
    tops.into_iter()
        .enumerate()
        .filter(|(_, top)| matches!(top, Some(top) if *top <= effective_offset))
        .map(|(index, _)| index)
        .last()
}

/// Owns the scroll subscription of a mounted page.
///
/// The subscription is released when [`detach`] is called or when the tracker is dropped.
/// After that the callback is never invoked again.
///
/// [`detach`]: Self::detach
pub struct ScrollTracker<S>
where
    S: ScrollSource,
{
    subscription: Option<S::Subscription>,
}

impl<S> ScrollTracker<S>
where
    S: ScrollSource,
{
    /// Creates a new tracker that is not subscribed to anything.
    #[inline]
    pub fn detached() -> Self {
        Self { subscription: None }
    }

    /// Subscribes `callback` to the scroll events of `source`. An existing subscription is
    /// released first.
    pub fn attach(&mut self, source: &S, callback: Callback<()>) {
        if self.detach() {
            log::debug!("Replacing existing scroll subscription");
        }

        self.subscription = Some(source.subscribe(callback));
    }

    /// Releases the subscription. Returns `true` if the tracker was attached.
    #[inline]
    pub fn detach(&mut self) -> bool {
        self.subscription.take().is_some()
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

impl<S> Default for ScrollTracker<S>
where
    S: ScrollSource,
{
    fn default() -> Self {
        Self::detached()
    }
}
