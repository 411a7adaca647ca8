//! Dashboard page: profile, balance, owned assets, transfer history, and
//! conversations. The route is protected — the guard redirects to login
//! before this renders without a session.

use leptos::html;
use leptos::prelude::*;

use crate::net::types::{Asset, ChatSession, Transfer, User};
use crate::state::auth::AuthState;
use crate::util::format::{format_timestamp, format_tokens, org_labels};

/// Dashboard page — account overview plus the asset mint dialog.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let profile = LocalResource::new(|| async {
        crate::net::account::profile().await.ok()
    });
    let balance = LocalResource::new(|| async {
        crate::net::wallet::balance().await.ok()
    });
    let assets = LocalResource::new(|| async {
        crate::net::wallet::assets_by_owner().await.unwrap_or_default()
    });
    let transfers = LocalResource::new(|| async {
        crate::net::wallet::transfers_by_sender().await.unwrap_or_default()
    });
    let conversations = LocalResource::new(move || load_conversations(auth));

    // Keep the shared auth state in step with the fetched profile.
    Effect::new(move || {
        if let Some(Some(user)) = profile.get() {
            auth.update(|a| a.user = Some(user));
        }
    });

    let show_mint = RwSignal::new(false);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn btn--primary" on:click=move |_| show_mint.set(true)>
                    "+ Mint Asset"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile.get().map(|user| view! { <ProfileCard user=user balance=balance/> })
                }}
            </Suspense>

            <section class="dashboard-page__section">
                <h2>"Your assets"</h2>
                <Suspense fallback=move || view! { <p>"Loading assets..."</p> }>
                    {move || assets.get().map(|list| view! { <AssetList assets=list/> })}
                </Suspense>
            </section>

            <section class="dashboard-page__section">
                <h2>"Sent transfers"</h2>
                <Suspense fallback=move || view! { <p>"Loading transfers..."</p> }>
                    {move || transfers.get().map(|list| view! { <TransferTable transfers=list/> })}
                </Suspense>
            </section>

            <section class="dashboard-page__section">
                <h2>"Messages"</h2>
                <Suspense fallback=move || view! { <p>"Loading conversations..."</p> }>
                    {move || {
                        conversations.get().map(|list| view! { <ConversationList entries=list/> })
                    }}
                </Suspense>
            </section>

            <Show when=move || show_mint.get()>
                <MintAssetDialog
                    on_close=Callback::new(move |()| show_mint.set(false))
                    assets=assets
                />
            </Show>
        </div>
    }
}

/// A conversation row: the session, the other account's id, and how many of
/// its messages are unread.
type ConversationEntry = (ChatSession, i64, i64);

async fn load_conversations(auth: RwSignal<AuthState>) -> Vec<ConversationEntry> {
    let Ok(sessions) = crate::net::chat::sessions().await else {
        return Vec::new();
    };
    let me = auth.get_untracked().user.map(|u| u.id).unwrap_or_default();

    let mut entries = Vec::with_capacity(sessions.len());
    for session in sessions {
        let other = if session.sender_id == me { session.recipient_id } else { session.sender_id };
        let unread = crate::net::chat::unread_count(other).await.unwrap_or(0);
        entries.push((session, other, unread));
    }
    entries
}

#[component]
fn ProfileCard(user: Option<User>, balance: LocalResource<Option<i64>>) -> impl IntoView {
    user.map(|user| {
        view! {
            <div class="profile-card">
                <h2>{user.username.clone()}</h2>
                <p>{user.email.clone()}</p>
                <p class="profile-card__orgs">{org_labels(&user.org)}</p>
                <p class="profile-card__balance">
                    "Balance: "
                    {move || {
                        balance
                            .get()
                            .flatten()
                            .map_or_else(|| "—".to_owned(), format_tokens)
                    }}
                </p>
            </div>
        }
    })
}

#[component]
fn AssetList(assets: Vec<Asset>) -> impl IntoView {
    if assets.is_empty() {
        return view! { <p>"No assets yet."</p> }.into_any();
    }
    view! {
        <ul class="asset-list">
            {assets
                .into_iter()
                .map(|asset| {
                    view! {
                        <li class="asset-list__item">
                            <span class="asset-list__name">{asset.name.clone()}</span>
                            <span class="asset-list__desc">{asset.description.clone()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[component]
fn TransferTable(transfers: Vec<Transfer>) -> impl IntoView {
    if transfers.is_empty() {
        return view! { <p>"No transfers yet."</p> }.into_any();
    }
    view! {
        <table class="transfer-table">
            <thead>
                <tr>
                    <th>"Recipient"</th>
                    <th>"Amount"</th>
                    <th>"Time"</th>
                </tr>
            </thead>
            <tbody>
                {transfers
                    .into_iter()
                    .map(|t| {
                        view! {
                            <tr>
                                <td>{t.recipient_id}</td>
                                <td>{format_tokens(t.amount)}</td>
                                <td>{format_timestamp(t.time.as_ref())}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn ConversationList(entries: Vec<ConversationEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p>"No conversations yet."</p> }.into_any();
    }
    view! {
        <ul class="conversation-list">
            {entries
                .into_iter()
                .map(|(session, other, unread)| {
                    view! {
                        <li class="conversation-list__item">
                            <span>"Account " {other}</span>
                            <span class="conversation-list__last">{session.last_message.clone()}</span>
                            <Show when=move || (unread > 0)>
                                <span class="conversation-list__unread">{unread}</span>
                            </Show>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

/// Modal dialog for minting a new asset from an image upload.
#[component]
fn MintAssetDialog(
    on_close: Callback<()>,
    assets: LocalResource<Vec<Asset>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let submit = Callback::new(move |()| {
        let asset_name = name.get();
        if asset_name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let Some(file) = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                error.set(Some("choose an image first".to_owned()));
                return;
            };

            let asset_name = asset_name.trim().to_owned();
            let asset_description = description.get();
            leptos::task::spawn_local(async move {
                match crate::net::asset::create(&asset_name, &asset_description, &file).await {
                    Ok(()) => {
                        assets.refetch();
                        on_close.run(());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (&assets, &file_input, &description);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Mint Asset"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Image"
                    <input class="dialog__input" type="file" accept="image/*" node_ref=file_input/>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Mint"
                    </button>
                </div>
            </div>
        </div>
    }
}
