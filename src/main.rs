use yew::prelude::*;
use yew_router::prelude::*;

use lpfc_dashboard::components::Header;
use lpfc_dashboard::route::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-container">
                <Header />
                <Switch<Route> render={switch} />

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
