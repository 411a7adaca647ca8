//! Registration page. Accounts pick one organization; the backend accepts
//! several, so the single selection is sent as a one-element list.

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Registration form — username, email, password, and organization.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let org = RwSignal::new(2_i32);
    let error = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        let name = username.get();
        let mail = email.get();
        let pass = password.get();
        if name.trim().is_empty() || pass.is_empty() {
            return;
        }

        let navigate = navigate.clone();
        error.set(None);

        leptos::task::spawn_local(async move {
            match crate::net::account::register(name.trim(), mail.trim(), &pass, &[org.get_untracked()])
                .await
            {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            <label class="auth-page__label">
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Organization"
                <select
                    prop:value=move || org.get().to_string()
                    on:change=move |ev| {
                        org.set(event_target_value(&ev).parse().unwrap_or(2));
                    }
                >
                    <option value="1">"Platform"</option>
                    <option value="2">"Creator"</option>
                    <option value="3">"Financial Institution"</option>
                </select>
            </label>
            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Create account"
            </button>
        </div>
    }
}
