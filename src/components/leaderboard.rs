use crate::models::dashboard::Dashboard;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub dashboard: Rc<Dashboard>,
}

/// Players ranked by number of distinct programs enrolled
#[function_component(Leaderboard)]
pub fn leaderboard(props: &LeaderboardProps) -> Html {
    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Rank"}</th>
                        <th>{"Player Name"}</th>
                        <th>{"Total Programs"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.dashboard.ranked_players().map(|(rank, player)| html! {
                        <tr key={rank}>
                            <td class="strong">{rank}</td>
                            <td>{player.full_name()}</td>
                            <td class="numeric highlight">{player.total_enrollments}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
