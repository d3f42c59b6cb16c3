use std::rc::Rc;

use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::providers::NavigatorProvider;
use crate::dom::{DomViewport, WindowScroll};
use crate::scrollspy::{ScrollSpy, ScrollTracker, SectionId, SectionRegistry, Viewport};
use crate::sections::{Format, Home, Overview, Prizes, Rules, Timeline};

pub struct App {
    spy: ScrollSpy,
    viewport: DomViewport,
    source: WindowScroll,
    tracker: ScrollTracker<WindowScroll>,
}

impl Component for App {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();

        Self {
            spy: ScrollSpy::new(props.registry.clone(), props.header_offset),
            viewport: DomViewport::default(),
            source: WindowScroll::default(),
            tracker: ScrollTracker::detached(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Scrolled => self.spy.track(&self.viewport),
            Message::Navigate(id) => self.spy.navigate(&self.viewport, id.as_str()),
            Message::ToggleMenu => {
                self.spy.toggle_menu();
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        let props = ctx.props();
        self.spy.reconfigure(props.registry.clone(), props.header_offset);

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onnavigate = ctx.link().callback(Message::Navigate);
        let ontoggle = ctx.link().callback(|()| Message::ToggleMenu);

        let title = ctx.props().title.clone();

        html! {
            <NavigatorProvider onnavigate={onnavigate.clone()}>
                <div class="main-wrapper">
                    <Navbar spy={self.spy.clone()} brand={title.clone()} {onnavigate} {ontoggle} />
                    <main>
                        <Home />
                        <Overview />
                        <Format />
                        <Timeline />
                        <Prizes />
                        <Rules />
                    </main>
                    <footer class="footer">
                        <p>{ title }</p>
                    </footer>
                </div>
            </NavigatorProvider>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        // The anchors exist only after the first render.
        for section in self.spy.registry() {
            if self.viewport.section_top(&section.id).is_none() {
                log::error!("No anchor element found for section {:?}", section.id.as_str());
            }
        }

        self.tracker
            .attach(&self.source, ctx.link().callback(|()| Message::Scrolled));

        // Pick up the position of a page that was reloaded while scrolled down.
        ctx.link().send_message(Message::Scrolled);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.tracker.detach() {
            log::debug!("Released scroll subscription");
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub registry: Rc<SectionRegistry>,
    pub header_offset: f64,
    pub title: String,
}

#[derive(Clone, Debug)]
pub enum Message {
    Scrolled,
    Navigate(SectionId),
    ToggleMenu,
}
