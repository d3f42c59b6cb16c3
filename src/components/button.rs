use yew::prelude::*;

/// An interactive button.
pub struct Button;

impl Component for Button {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, _msg: Self::Message) -> bool {
        if let Some(cb) = &ctx.props().onclick {
            cb.emit(());
        }

        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = ctx.props().title;
        let classes = classes!("button", ctx.props().classes.clone());
        let expanded = ctx
            .props()
            .expanded
            .map(|expanded| if expanded { "true" } else { "false" });

        let onclick = ctx.link().callback(|_| ());

        html! {
            <button type="button" class={classes} {title} aria-expanded={expanded} {onclick}>
                { for ctx.props().children.iter() }
            </button>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    pub title: &'static str,
    #[prop_or_default]
    pub classes: Classes,
    /// Sets `aria-expanded` for buttons that toggle a panel.
    #[prop_or_default]
    pub expanded: Option<bool>,
}
