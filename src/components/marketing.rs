use crate::config::Config;
use yew::prelude::*;

/// Embeds the pre-built marketing document as-is
#[function_component(MarketingPage)]
pub fn marketing_page() -> Html {
    html! {
        <main class="app-main">
            <div class="marketing-frame">
                <iframe
                    src={Config::MARKETING_ASSET}
                    title="LaPorte FC Marketing Materials"
                    class="marketing-iframe"
                />
            </div>
        </main>
    }
}
