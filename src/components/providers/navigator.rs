use yew::context::ContextProvider;
use yew::prelude::*;

use super::Provider;
use crate::scrollspy::SectionId;

/// A handle to request navigation to a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigator {
    callback: Callback<SectionId>,
}

impl Navigator {
    #[inline]
    pub fn new(callback: Callback<SectionId>) -> Self {
        Self { callback }
    }

    /// Scrolls to the section `id` and marks it active.
    #[inline]
    pub fn navigate<T>(&self, id: T)
    where
        T: Into<SectionId>,
    {
        self.callback.emit(id.into());
    }

    /// Returns a callback that navigates to `id` whenever it is emitted.
    pub fn to(&self, id: &'static str) -> Callback<()> {
        let navigator = self.clone();
        Callback::from(move |()| navigator.navigate(id))
    }
}

/// Provides a [`Navigator`] to all children.
pub struct NavigatorProvider;

impl Component for NavigatorProvider {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigator = Navigator::new(ctx.props().onnavigate.clone());

        html! {
            <ContextProvider<Navigator> context={navigator}>
                { for ctx.props().children.iter() }
            </ContextProvider<Navigator>>
        }
    }
}

impl Provider<Navigator> for NavigatorProvider {
    fn get<C>(ctx: &Context<C>) -> Navigator
    where
        C: Component,
    {
        let (navigator, _) = ctx
            .link()
            .context::<Navigator>(Callback::noop())
            .expect("No NavigatorProvider given");

        navigator
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub children: Children,
    pub onnavigate: Callback<SectionId>,
}
