//! Login page. On success the session is stored and the navigation the
//! guard interrupted (the `redirect` query parameter) is resumed.

use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_navigate, use_query_map},
};

use crate::state::auth::AuthState;
use crate::state::session;

/// Login form — username and password, submitted to the account API.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let name = username.get();
        let pass = password.get();
        if name.trim().is_empty() || pass.is_empty() {
            return;
        }

        let navigate = navigate.clone();
        let target = query
            .get_untracked()
            .get("redirect")
            .unwrap_or_else(|| "/".to_owned());
        pending.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            match crate::net::account::login(name.trim(), &pass).await {
                Ok(payload) => {
                    session::set_token(&payload.token);
                    session::set_user(&payload.user);
                    auth.update(|a| {
                        a.user = Some(payload.user);
                        a.loading = false;
                    });
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => {
                    pending.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            <label class="auth-page__label">
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button
                class="btn btn--primary"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                "Log in"
            </button>
            <p>
                "No account yet? "
                <leptos_router::components::A href="/register">"Register"</leptos_router::components::A>
            </p>
        </div>
    }
}
