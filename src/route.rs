use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{dashboard::DashboardPage, marketing::MarketingPage};

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/marketing")]
    Marketing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries shown in the header navigation, in order
    pub fn nav_links() -> &'static [(Route, &'static str)] {
        &[
            (Route::Dashboard, "Dashboard"),
            (Route::Marketing, "Marketing Materials"),
        ]
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Marketing => html! { <MarketingPage /> },
        Route::NotFound => html! {
            <main class="app-main">
                <div class="status error">
                    <p class="status-message">{"Page not found."}</p>
                </div>
            </main>
        },
    }
}
