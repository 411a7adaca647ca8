//! Root application component with routing, contexts, and the navigation
//! guard.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    auction::AuctionPage, bank::BankPage, dashboard::DashboardPage, home::HomePage,
    login::LoginPage, market::MarketPage, register::RegisterPage,
};
use crate::routes::GuardDecision;
use crate::state::auth::AuthState;
use crate::state::session;

/// Root application component.
///
/// Provides the shared auth context and sets up client-side routing with
/// the pre-navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_session());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/bazaar-web.css"/>
        <Title text="Bazaar"/>

        <Router>
            <NavigationGuard/>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("market") view=MarketPage/>
                    <Route path=StaticSegment("auction") view=AuctionPage/>
                    <Route path=StaticSegment("bank") view=BankPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Evaluates the route guard on every location change.
///
/// Renders nothing; on a protected path without a stored token it redirects
/// to the login route, carrying the intended destination.
#[component]
fn NavigationGuard() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        if let GuardDecision::Redirect(target) =
            crate::routes::check(&path, session::token().is_some())
        {
            navigate(&target, NavigateOptions::default());
        }
    });
}
