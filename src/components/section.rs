use yew::prelude::*;

/// A full-width page section. The `id` is the anchor the navbar scrolls to.
pub struct PageSection;

impl Component for PageSection {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let header = match props.title {
            Some(title) => html! {
                <div class="section-header">
                    <h2>{ title }</h2>
                    <div class="section-divider"></div>
                </div>
            },
            None => html! {},
        };

        html! {
            <section id={props.id} class={classes!("section", props.classes.clone())}>
                <div class="container">
                    { header }
                    { for props.children.iter() }
                </div>
            </section>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub children: Children,
    pub id: &'static str,
    #[prop_or_default]
    pub title: Option<&'static str>,
    #[prop_or_default]
    pub classes: Classes,
}
