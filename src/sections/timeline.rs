use yew::prelude::*;

use crate::components::card::Card;
use crate::components::section::PageSection;
use crate::content::TIMELINE;

pub struct Timeline;

impl Component for Timeline {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let days: Html = TIMELINE
            .iter()
            .enumerate()
            .map(|(index, day)| {
                let number = index + 1;

                html! {
                    <Card tone={Some(day.tone)} classes="timeline-day">
                        <div class="timeline-number">{ number }</div>
                        <p class="timeline-label">{ format!("Day {}", number) }</p>
                        <p>{ day.event }</p>
                    </Card>
                }
            })
            .collect();

        html! {
            <PageSection id="timeline" title={Some("Tournament Timeline")}>
                <div class="grid grid-4">
                    { days }
                </div>
            </PageSection>
        }
    }
}
