use yew::prelude::*;

use crate::content::Tone;

pub struct Card;

impl Component for Card {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let tone = props.tone.map(|tone| format!("card-{}", tone.as_str()));

        let header = match props.title {
            Some(title) => html! {
                <div class="card-header">
                    <h3 class="card-title">
                        { props.icon.clone() }
                        { title }
                    </h3>
                </div>
            },
            None => html! {},
        };

        html! {
            <div class={classes!("card", tone, props.classes.clone())}>
                { header }
                <div class="card-content">
                    { for props.children.iter() }
                </div>
            </div>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub children: Children,
    #[prop_or_default]
    pub title: Option<&'static str>,
    /// Rendered in front of the title.
    #[prop_or_default]
    pub icon: Html,
    #[prop_or_default]
    pub tone: Option<Tone>,
    #[prop_or_default]
    pub classes: Classes,
}
