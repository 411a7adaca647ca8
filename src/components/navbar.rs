//! Top navigation bar with section links and the session controls.

use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

use crate::state::auth::AuthState;
use crate::state::session;

/// Navigation bar — section links plus login/logout depending on session
/// state.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // Best effort: the local session is dropped even if the backend
            // call fails.
            if let Err(e) = crate::net::account::logout().await {
                log::warn!("logout request failed: {e}");
            }
            session::clear();
            auth.update(|a| a.user = None);
            navigate(crate::routes::LOGIN_PATH, NavigateOptions::default());
        });
    });

    view! {
        <nav class="navbar">
            <span class="navbar__brand">
                <A href="/">"Bazaar"</A>
            </span>
            <div class="navbar__links">
                <A href="/market">"Market"</A>
                <A href="/auction">"Auction"</A>
                <A href="/bank">"Bank"</A>
                <A href="/dashboard">"Dashboard"</A>
            </div>
            <div class="navbar__session">
                {move || {
                    auth.get().user.map_or_else(
                        || {
                            view! {
                                <span>
                                    <A href="/login">"Log in"</A>
                                    " "
                                    <A href="/register">"Register"</A>
                                </span>
                            }
                                .into_any()
                        },
                        |user| {
                            view! {
                                <span>
                                    <span class="navbar__user">{user.username.clone()}</span>
                                    <button class="btn" on:click=move |_| on_logout.run(())>
                                        "Log out"
                                    </button>
                                </span>
                            }
                                .into_any()
                        },
                    )
                }}
            </div>
        </nav>
    }
}
