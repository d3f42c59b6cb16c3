use std::fmt::{self, Display, Formatter};

use yew::{html, Component, Context, Html, Properties};

#[derive(Clone, Debug, PartialEq, Eq, Properties)]
pub struct Props {
    /// Screen reader label. Decorative icons next to visible text pass an empty label.
    #[prop_or_default]
    pub label: &'static str,
    #[prop_or_default]
    pub size: FaSize,
}

#[allow(dead_code)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FaSize {
    Small,
    #[default]
    Normal,
    Large,
    ExtraLarge,
    ExtraLarge2,
}

impl FaSize {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "fa-sm",
            Self::Normal => "",
            Self::Large => "fa-lg",
            Self::ExtraLarge => "fa-xl",
            Self::ExtraLarge2 => "fa-2xl",
        }
    }
}

impl Display for FaSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! fa_icon {
    ($($id:ident, $name:expr),*$(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $id;

            impl Component for $id {
                type Message = ();
                type Properties = Props;

                fn create(_ctx: &Context<Self>) -> Self {
                    Self
                }

                fn view(&self, ctx: &Context<Self>) -> Html {
                    let classes = format!("fa-solid {} {}", $name, ctx.props().size);

                    let label = ctx.props().label;
                    if label.is_empty() {
                        return html! {
                            <i aria-hidden="true" class={classes}></i>
                        };
                    }

                    html! {
                        <>
                            <i aria-hidden="true" class={classes}></i>
                            <span class="sr-only">{ label }</span>
                        </>
                    }
                }
            }
        )*
    };
}

fa_icon! {
    FaTrophy, "fa-trophy",
    FaUsers, "fa-users",
    FaBullseye, "fa-bullseye",
    FaCalendar, "fa-calendar",
    FaAward, "fa-award",
    FaLocationDot, "fa-location-dot",
    FaBars, "fa-bars",
    FaXmark, "fa-xmark",
}

/// Renders the navigation icon for the section `id`.
pub fn section_icon(id: &str) -> Html {
    match id {
        "home" => html! { <FaTrophy /> },
        "overview" => html! { <FaUsers /> },
        "format" => html! { <FaBullseye /> },
        "timeline" => html! { <FaCalendar /> },
        "prizes" => html! { <FaAward /> },
        "rules" => html! { <FaLocationDot /> },
        _ => html! {},
    }
}
