use crate::hooks::use_dashboard::DashboardState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DashboardState,
}

/// Busy and failure placeholders. Renders nothing once data is ready.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        DashboardState::Idle | DashboardState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading dashboard..."}</p>
            </div>
        },
        DashboardState::Error(msg) => html! {
            <div class="status error">
                <p class="status-message">{msg}</p>
                <p class="status-hint">{"Make sure Docker containers are running."}</p>
            </div>
        },
        DashboardState::Ready(_) => html! {},
    }
}
