use yew::prelude::*;

use crate::components::card::Card;
use crate::components::icons::{FaAward, FaLocationDot, FaTrophy};
use crate::components::section::PageSection;
use crate::content::{
    clash_squad_maps, format_inr, BATTLE_ROYALE_MAPS, CLASH_SQUAD_STAGES, MATCHES_PER_DAY,
    PLACEMENT_POINTS, POINTS_PER_KILL, PRIZES, TIE_BREAKERS,
};

pub struct Rules;

impl Component for Rules {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let placements: Html = PLACEMENT_POINTS
            .iter()
            .map(|(place, points)| {
                let points = match *points {
                    1 => String::from("1 pt"),
                    n => format!("{} pts", n),
                };

                html! {
                    <div class="points-row">
                        <span>{ place }</span>
                        <span class="points">{ points }</span>
                    </div>
                }
            })
            .collect();

        let tie_breakers: Html = TIE_BREAKERS
            .iter()
            .map(|rule| html! { <li>{ rule }</li> })
            .collect();

        let maps: Html = BATTLE_ROYALE_MAPS
            .iter()
            .map(|map| html! { <span class="badge badge-outline">{ map }</span> })
            .collect();

        let series: Html = [1, 3, 5]
            .into_iter()
            .map(|best_of| {
                html! {
                    <div class="map-set">
                        <p>{ format!("Best of {} → {}", best_of, clash_squad_maps(best_of).join(", ")) }</p>
                    </div>
                }
            })
            .collect();

        let stages: Html = CLASH_SQUAD_STAGES
            .iter()
            .map(|stage| {
                let matches = if stage.matches == 1 {
                    String::from("(1 match)")
                } else {
                    format!("({} matches)", stage.matches)
                };

                html! {
                    <div class="stage">
                        <h4>{ stage.name }</h4>
                        <p>{ format!("Best of {}", stage.best_of) }</p>
                        <p class="stage-matches">{ matches }</p>
                    </div>
                }
            })
            .collect();

        let clash_squad_prize = PRIZES
            .iter()
            .find(|prize| prize.place == "Clash Squad Winner")
            .map(|prize| format_inr(prize.amount))
            .unwrap_or_default();

        let points_icon = html! { <FaTrophy /> };
        let maps_icon = html! { <FaLocationDot /> };
        let clash_squad_icon = html! { <FaAward /> };

        html! {
            <PageSection id="rules" title={Some("Rules & Maps")}>
                <div class="grid grid-2">
                    <Card title={Some("Point System (Battle Royale)")} icon={points_icon}>
                        <div>
                            <h4>{ "Placement Points" }</h4>
                            <div class="points-table">
                                { placements }
                            </div>
                        </div>
                        <div>
                            <h4>{ "Kill Points & Tie-breakers" }</h4>
                            <p>{ format!("Kill Points: 1 kill = {} point", POINTS_PER_KILL) }</p>
                            <p>{ "Tie-breakers:" }</p>
                            <ol>
                                { tie_breakers }
                            </ol>
                        </div>
                    </Card>
                    <Card title={Some("Map Schedule")} icon={maps_icon}>
                        <div>
                            <h4>{ "Battle Royale Maps" }</h4>
                            <p>{ format!("{} matches per day", MATCHES_PER_DAY) }</p>
                            <div class="map-list">
                                { maps }
                            </div>
                        </div>
                        <div>
                            <h4>{ "Clash Squad Maps" }</h4>
                            { series }
                        </div>
                    </Card>
                </div>
                <Card title={Some("Clash Squad Format - Final Day")} icon={clash_squad_icon}>
                    <div class="grid grid-3">
                        { stages }
                    </div>
                    <p class="clash-squad-summary">
                        <span class="highlight">{ "Top 8 teams" }</span>
                        { " from the Grand Finals compete for " }
                        <span class="highlight">{ "Clash Squad supremacy" }</span>
                        { " and " }
                        <span class="highlight">{ format!("{} prize", clash_squad_prize) }</span>
                    </p>
                </Card>
            </PageSection>
        }
    }
}
