use yew::prelude::*;

use crate::components::card::Card;
use crate::components::icons::{FaSize, FaTrophy};
use crate::components::section::PageSection;
use crate::content::{format_inr, Tone, PRIZES, PRIZE_POOL};

pub struct Prizes;

impl Component for Prizes {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let prizes: Html = PRIZES
            .iter()
            .map(|prize| {
                html! {
                    <Card tone={Some(prize.tone)} classes="prize">
                        <div>
                            <p class="prize-place">{ prize.place }</p>
                            <p class="prize-title">{ prize.title }</p>
                        </div>
                        <p class="prize-amount">{ format_inr(prize.amount) }</p>
                    </Card>
                }
            })
            .collect();

        html! {
            <PageSection id="prizes" title={Some("Prize Pool & Honors")}>
                <div class="prize-board">
                    <div>
                        <Card tone={Some(Tone::Gold)} classes="prize-total">
                            <FaTrophy size={FaSize::ExtraLarge2} />
                            <h3>{ "Total Prize Pool" }</h3>
                            <p class="prize-amount">{ format_inr(PRIZE_POOL) }</p>
                            <span class="badge">{ "Biggest FF Max Tournament" }</span>
                        </Card>
                        <div class="prize-list">
                            { prizes }
                        </div>
                    </div>
                </div>
            </PageSection>
        }
    }
}
