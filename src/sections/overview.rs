use yew::prelude::*;

use crate::components::card::Card;
use crate::components::icons::{FaAward, FaBullseye, FaCalendar, FaSize, FaTrophy, FaUsers};
use crate::components::section::PageSection;
use crate::content::{TOTAL_TEAMS, TOURNAMENT_DAYS};

pub struct Overview;

impl Component for Overview {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let highlights = [
            (html! { <FaTrophy size={FaSize::ExtraLarge} /> }, "PC + Mobile", "First-of-its-kind competition"),
            (html! { <FaBullseye size={FaSize::ExtraLarge} /> }, "Champion Rush", "Innovative grand finals format"),
            (html! { <FaUsers size={FaSize::ExtraLarge} /> }, "Structured Groups", "4 groups of 6 teams each"),
            (html! { <FaAward size={FaSize::ExtraLarge} /> }, "Clash Squad", "Additional competitive mode"),
        ];

        let highlights: Html = highlights
            .into_iter()
            .map(|(icon, title, detail)| {
                html! {
                    <Card classes="highlight">
                        { icon }
                        <h4>{ title }</h4>
                        <p>{ detail }</p>
                    </Card>
                }
            })
            .collect();

        html! {
            <PageSection id="overview" title={Some("Tournament Overview")}>
                <div class="overview-summary">
                    <Card>
                        <h3>{ "Executive Summary" }</h3>
                        <p>
                            { "This tournament is a unique Free Fire Max competition bringing PC + Mobile players together \
                               for the first time, ensuring fresh dynamics and highly competitive gameplay." }
                        </p>
                        <p>
                            { "With a structured group stage, intense play-ins, and an innovative Champion Rush Grand Finals \
                               format, the event guarantees thrilling matches and unforgettable moments." }
                        </p>
                        <p>
                            { "The addition of a Clash Squad mode after the grand finals further amplifies excitement, \
                               providing teams and audiences with multiple ways to shine." }
                        </p>
                    </Card>
                    <div class="grid grid-2">
                        <Card classes="stat">
                            <FaUsers size={FaSize::ExtraLarge} />
                            <p class="stat-value">{ TOTAL_TEAMS }</p>
                            <p class="stat-label">{ "Total Teams" }</p>
                        </Card>
                        <Card classes="stat">
                            <FaCalendar size={FaSize::ExtraLarge} />
                            <p class="stat-value">{ TOURNAMENT_DAYS }</p>
                            <p class="stat-label">{ "Days Tournament" }</p>
                        </Card>
                    </div>
                </div>
                <div class="grid grid-4">
                    { highlights }
                </div>
            </PageSection>
        }
    }
}
