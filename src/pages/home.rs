//! Landing page with entry points into the marketplace.

use leptos::prelude::*;
use leptos_router::components::A;

/// Home page — a short pitch and links into the main sections.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Bazaar"</h1>
            <p>"Mint assets, trade them on the market, and settle in platform tokens."</p>
            <div class="home-page__links">
                <A href="/market">"Browse the market"</A>
                <A href="/auction">"Live auctions"</A>
                <A href="/dashboard">"Your dashboard"</A>
            </div>
        </div>
    }
}
