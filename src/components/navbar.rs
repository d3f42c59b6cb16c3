use yew::prelude::*;

use crate::components::button::Button;
use crate::components::icons::{section_icon, FaBars, FaSize, FaTrophy, FaXmark};
use crate::scrollspy::{ScrollSpy, SectionId};

/// The fixed page header.
///
/// Shows one navigation button per registered section, highlighting the active one. On
/// small screens the buttons move into a collapsible panel opened by the menu button.
#[derive(Debug)]
pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let spy = &props.spy;

        let links = |class: &'static str| -> Html {
            spy.registry()
                .iter()
                .map(|section| {
                    let classes = if spy.is_active(&section.id) {
                        classes!(class, "active")
                    } else {
                        classes!(class)
                    };

                    let onclick = {
                        let onnavigate = props.onnavigate.clone();
                        let id = section.id.clone();
                        Callback::from(move |_: MouseEvent| onnavigate.emit(id.clone()))
                    };

                    html! {
                        <li>
                            <button type="button" class={classes} {onclick}>
                                { section_icon(section.id.as_str()) }
                                <span>{ &section.label }</span>
                            </button>
                        </li>
                    }
                })
                .collect()
        };

        let menu_open = spy.is_menu_open();
        let (toggle_icon, toggle_title) = if menu_open {
            (html! { <FaXmark size={FaSize::Large} /> }, "Close Menu")
        } else {
            (html! { <FaBars size={FaSize::Large} /> }, "Open Menu")
        };

        let mobile_nav = if menu_open {
            html! {
                <nav class="navbar-mobile">
                    <ul>
                        { links("navbar-link") }
                    </ul>
                </nav>
            }
        } else {
            html! {}
        };

        html! {
            <header class="navbar">
                <div class="container navbar-inner">
                    <div class="navbar-brand">
                        <FaTrophy size={FaSize::ExtraLarge} />
                        <span>{ &props.brand }</span>
                    </div>
                    <nav class="navbar-desktop">
                        <ul>
                            { links("navbar-link") }
                        </ul>
                    </nav>
                    <Button classes="navbar-toggle" title={toggle_title} expanded={Some(menu_open)} onclick={props.ontoggle.clone()}>
                        { toggle_icon }
                    </Button>
                </div>
                { mobile_nav }
            </header>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub spy: ScrollSpy,
    pub brand: String,
    pub onnavigate: Callback<SectionId>,
    pub ontoggle: Callback<()>,
}
