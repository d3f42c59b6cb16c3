use yew::prelude::*;

use crate::components::card::Card;
use crate::components::icons::{FaBullseye, FaTrophy, FaUsers};
use crate::components::section::PageSection;
use crate::content::{GROUPS, ROADMAP, TEAMS_PER_GROUP, TOTAL_TEAMS};

pub struct Format;

impl Component for Format {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let groups: Html = GROUPS
            .iter()
            .map(|group| {
                html! {
                    <div class="group">
                        <p class="group-name">{ group }</p>
                        <p class="group-size">{ format!("{} Teams", TEAMS_PER_GROUP) }</p>
                    </div>
                }
            })
            .collect();

        let roadmap: Html = ROADMAP
            .iter()
            .enumerate()
            .map(|(index, step)| {
                html! {
                    <li class="step">
                        <div class="step-number">{ index + 1 }</div>
                        <div>
                            <p class="step-title">{ step.title }</p>
                            <p class="step-detail">{ step.detail }</p>
                        </div>
                    </li>
                }
            })
            .collect();

        let teams_icon = html! { <FaUsers /> };
        let roadmap_icon = html! { <FaBullseye /> };
        let finals_icon = html! { <FaTrophy /> };

        html! {
            <PageSection id="format" title={Some("Tournament Format")}>
                <div class="grid grid-2">
                    <Card title={Some("Team Distribution")} icon={teams_icon}>
                        <div class="team-total">
                            <p>{ format!("{} Total Teams", TOTAL_TEAMS) }</p>
                            <span class="badge">{ "All from Partner Program" }</span>
                        </div>
                        <div class="grid grid-2">
                            { groups }
                        </div>
                    </Card>
                    <Card title={Some("Tournament Roadmap")} icon={roadmap_icon}>
                        <ol class="roadmap">
                            { roadmap }
                        </ol>
                    </Card>
                </div>
                <Card title={Some("Champion Rush Grand Finals")} icon={finals_icon}>
                    <div class="grid grid-3">
                        <div class="fact">
                            <p class="fact-value">{ "12 Teams" }</p>
                            <p class="fact-detail">{ "Top 8 from Groups + Top 4 from Play-ins" }</p>
                        </div>
                        <div class="fact">
                            <p class="fact-value">{ "80 Points + Booyah" }</p>
                            <p class="fact-detail">{ "Win condition for championship" }</p>
                        </div>
                        <div class="fact">
                            <p class="fact-value">{ "Max 8 Matches" }</p>
                            <p class="fact-detail">{ "If no 80+Booyah, highest points win" }</p>
                        </div>
                    </div>
                </Card>
            </PageSection>
        }
    }
}
