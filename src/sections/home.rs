use yew::prelude::*;

use crate::components::button::Button;
use crate::components::providers::{NavigatorProvider, Provider};
use crate::components::section::PageSection;
use crate::content::{format_inr, PRIZE_POOL, TOTAL_TEAMS};

/// The hero banner.
pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let navigator = NavigatorProvider::get(ctx);

        html! {
            <PageSection id="home" classes="hero">
                <div class="hero-content">
                    <span class="badge badge-accent">{ "EXCLUSIVE TOURNAMENT" }</span>
                    <h1 class="hero-title">{ "FREE FIRE MAX" }</h1>
                    <h2 class="hero-subtitle">{ "ESPORTS TOURNAMENT" }</h2>
                    <div class="hero-stats">
                        <div class="stat stat-gold">
                            <p class="stat-label">{ "Prize Pool" }</p>
                            <p class="stat-value">{ format_inr(PRIZE_POOL) }</p>
                        </div>
                        <div class="stat stat-secondary">
                            <p class="stat-label">{ "Total Teams" }</p>
                            <p class="stat-value">{ TOTAL_TEAMS }</p>
                        </div>
                    </div>
                    <p class="hero-tagline">
                        { "First-of-its-kind competition featuring both PC and Mobile players in an epic 7-day tournament" }
                    </p>
                    <Button classes="button-hero" title="Explore Tournament" onclick={navigator.to("overview")}>
                        { "Explore Tournament" }
                    </Button>
                </div>
            </PageSection>
        }
    }
}
