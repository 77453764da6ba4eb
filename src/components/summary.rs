use crate::models::dashboard::SummaryCards;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub cards: SummaryCards,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let cards = props.cards;

    html! {
        <div class="summary-grid">
            <div class="summary-item accent-players">
                <h3>{"Total Players"}</h3>
                <p class="summary-value">{cards.total_players}</p>
            </div>
            <div class="summary-item accent-families">
                <h3>{"Total Families"}</h3>
                <p class="summary-value">{cards.total_families}</p>
            </div>
            <div class="summary-item accent-programs">
                <h3>{"Programs"}</h3>
                <p class="summary-value">{cards.programs}</p>
            </div>
            <div class="summary-item accent-years">
                <h3>{"Active Years"}</h3>
                <p class="summary-value">{cards.active_years}</p>
            </div>
        </div>
    }
}
