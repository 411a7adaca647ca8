//! Bank page: balance, transfers, minting, and withholdings.
//!
//! Minting is shown to everyone; the backend rejects it for accounts
//! outside the financial organization and the error is surfaced as-is.

use leptos::prelude::*;

use crate::net::types::WithHolding;
use crate::util::format::{format_timestamp, format_tokens};

/// Bank page — wallet operations against the authenticated account.
#[component]
pub fn BankPage() -> impl IntoView {
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let balance = LocalResource::new(|| async {
        crate::net::wallet::balance().await.ok()
    });
    let holdings = LocalResource::new(|| async {
        crate::net::wallet::with_holdings_by_account().await.unwrap_or_default()
    });

    let refetch_all = Callback::new(move |()| {
        balance.refetch();
        holdings.refetch();
    });

    view! {
        <div class="bank-page">
            <h1>"Bank"</h1>

            <p class="bank-page__balance">
                "Balance: "
                {move || {
                    balance
                        .get()
                        .flatten()
                        .map_or_else(|| "—".to_owned(), format_tokens)
                }}
            </p>

            <Show when=move || error.get().is_some()>
                <p class="bank-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="bank-page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <section class="bank-page__section">
                <h2>"Send tokens"</h2>
                <TransferForm error=error notice=notice on_change=refetch_all/>
            </section>

            <section class="bank-page__section">
                <h2>"Mint tokens"</h2>
                <MintForm error=error notice=notice on_change=refetch_all/>
            </section>

            <section class="bank-page__section">
                <h2>"Withholdings"</h2>
                <Suspense fallback=move || view! { <p>"Loading withholdings..."</p> }>
                    {move || holdings.get().map(|list| view! { <HoldingTable holdings=list/> })}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn TransferForm(
    error: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
    on_change: Callback<()>,
) -> impl IntoView {
    let recipient = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let (Ok(recipient_id), Ok(tokens)) = (
            recipient.get().trim().parse::<i64>(),
            amount.get().trim().parse::<i64>(),
        ) else {
            error.set(Some("recipient and amount must be numbers".to_owned()));
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::wallet::transfer(recipient_id, tokens).await {
                Ok(()) => {
                    error.set(None);
                    notice.set(Some("transfer sent".to_owned()));
                    on_change.run(());
                }
                Err(e) => {
                    notice.set(None);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="bank-form">
            <input
                type="text"
                placeholder="Recipient account id"
                prop:value=move || recipient.get()
                on:input=move |ev| recipient.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Amount"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Send"
            </button>
        </div>
    }
}

#[component]
fn MintForm(
    error: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
    on_change: Callback<()>,
) -> impl IntoView {
    let account = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let (Ok(account_id), Ok(tokens)) = (
            account.get().trim().parse::<i64>(),
            amount.get().trim().parse::<i64>(),
        ) else {
            error.set(Some("account and amount must be numbers".to_owned()));
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::wallet::mint_token(account_id, tokens).await {
                Ok(()) => {
                    error.set(None);
                    notice.set(Some("tokens minted".to_owned()));
                    on_change.run(());
                }
                Err(e) => {
                    notice.set(None);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="bank-form">
            <input
                type="text"
                placeholder="Target account id"
                prop:value=move || account.get()
                on:input=move |ev| account.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Amount"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Mint"
            </button>
        </div>
    }
}

#[component]
fn HoldingTable(holdings: Vec<WithHolding>) -> impl IntoView {
    if holdings.is_empty() {
        return view! { <p>"No withholdings."</p> }.into_any();
    }
    view! {
        <table class="holding-table">
            <thead>
                <tr>
                    <th>"Listing"</th>
                    <th>"Amount"</th>
                    <th>"Since"</th>
                </tr>
            </thead>
            <tbody>
                {holdings
                    .into_iter()
                    .map(|h| {
                        view! {
                            <tr>
                                <td>{h.listing_id.clone()}</td>
                                <td>{format_tokens(h.amount)}</td>
                                <td>{format_timestamp(h.time_stamp.as_ref())}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
