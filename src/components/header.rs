use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

/// Site title and navigation; highlights the link for the current route
#[function_component(Header)]
pub fn header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <h1 class="site-title">{"LaPorte FC"}</h1>
                <nav>
                    <ul class="nav-links">
                        { for Route::nav_links().iter().map(|(route, label)| {
                            let classes = if current == Some(*route) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            };
                            html! {
                                <li>
                                    <Link<Route> to={*route} classes={classes}>{*label}</Link<Route>>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
