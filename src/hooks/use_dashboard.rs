use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{dashboard::Dashboard, error::AppError};
use crate::services::loader::fetch_dashboard;
use wasm_bindgen_futures::spawn_local;

/// The only failure text a visitor ever sees.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load data. Please check if the backend is running.";

#[derive(Clone, PartialEq, Debug)]
pub enum DashboardState {
    Idle,
    Loading,
    Ready(Rc<Dashboard>),
    Error(String),
}

impl DashboardState {
    /// Terminal state for a finished load. Error details are dropped here.
    pub fn settle(result: Result<Dashboard, AppError>) -> Self {
        match result {
            Ok(dashboard) => DashboardState::Ready(Rc::new(dashboard)),
            Err(_) => DashboardState::Error(LOAD_FAILED_MESSAGE.to_string()),
        }
    }

    /// Returns true while nothing can be rendered yet
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Idle | DashboardState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DashboardState::Ready(_) | DashboardState::Error(_))
    }

    /// Returns the dashboard if it is loaded
    pub fn data(&self) -> Option<&Rc<Dashboard>> {
        match self {
            DashboardState::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }
}

/// Loads the dashboard once per mount. There is no refresh or retry.
#[hook]
pub fn use_dashboard() -> UseStateHandle<DashboardState> {
    let state = use_state(|| DashboardState::Idle);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            state.set(DashboardState::Loading);
            gloo::console::log!(format!("Loading dashboard from {}", Config::api_base_url()));

            spawn_local(async move {
                let result = fetch_dashboard().await;
                match &result {
                    Ok(dashboard) => {
                        let summary = dashboard.summary();
                        gloo::console::log!(format!(
                            "Dashboard loaded: {} programs, {} years, {} ranked players",
                            summary.programs,
                            summary.active_years,
                            dashboard.leaderboard_len()
                        ));
                    }
                    Err(e) => gloo::console::error!(format!("Dashboard load failed: {e}")),
                }
                state.set(DashboardState::settle(result));
            });

            || () // Cleanup
        });
    }

    state
}
