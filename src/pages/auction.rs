//! Auction page: live lots with bidding, the caller's own lots, and lot
//! creation.

use leptos::prelude::*;

use crate::net::types::{CreateLotRequest, Lot};
use crate::util::format::{format_timestamp, format_tokens};

/// Auction page — all lots, bid controls, and a create-lot form.
#[component]
pub fn AuctionPage() -> impl IntoView {
    let error = RwSignal::new(Option::<String>::None);

    let lots = LocalResource::new(|| async {
        crate::net::auction::lots().await.unwrap_or_default()
    });
    let my_lots = LocalResource::new(|| async {
        crate::net::auction::lots_by_seller().await.unwrap_or_default()
    });

    let refetch_all = Callback::new(move |()| {
        lots.refetch();
        my_lots.refetch();
    });

    view! {
        <div class="auction-page">
            <h1>"Auction"</h1>

            <Show when=move || error.get().is_some()>
                <p class="auction-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading lots..."</p> }>
                {move || lots.get().map(|list| view! { <LotTable lots=list error=error on_change=refetch_all/> })}
            </Suspense>

            <section class="auction-page__section">
                <h2>"Your lots"</h2>
                <Suspense fallback=move || view! { <p>"Loading lots..."</p> }>
                    {move || my_lots.get().map(|list| view! { <MyLotList lots=list error=error/> })}
                </Suspense>
            </section>

            <section class="auction-page__section">
                <h2>"Put an asset up for auction"</h2>
                <CreateLotForm error=error on_change=refetch_all/>
            </section>
        </div>
    }
}

#[component]
fn LotTable(
    lots: Vec<Lot>,
    error: RwSignal<Option<String>>,
    on_change: Callback<()>,
) -> impl IntoView {
    if lots.is_empty() {
        return view! { <p>"No lots are up for auction."</p> }.into_any();
    }
    view! {
        <table class="lot-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Reserve"</th>
                    <th>"Current"</th>
                    <th>"Deadline"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {lots
                    .into_iter()
                    .map(|lot| view! { <LotRow lot=lot error=error on_change=on_change/> })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn LotRow(lot: Lot, error: RwSignal<Option<String>>, on_change: Callback<()>) -> impl IntoView {
    let lot_id = lot.id;
    let bid_price = RwSignal::new(String::new());

    let on_bid = Callback::new(move |()| {
        let Ok(price) = bid_price.get().trim().parse::<i64>() else {
            error.set(Some("bid must be a number".to_owned()));
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::auction::bid(lot_id, price).await {
                Ok(()) => {
                    error.set(None);
                    on_change.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <tr>
            <td>{lot.title.clone()}</td>
            <td>{format_tokens(lot.reserve_price)}</td>
            <td>{format_tokens(lot.current_price)}</td>
            <td>{format_timestamp(lot.deadline.as_ref())}</td>
            <td>
                <input
                    class="lot-table__bid"
                    type="text"
                    placeholder="Bid"
                    prop:value=move || bid_price.get()
                    on:input=move |ev| bid_price.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| on_bid.run(())>
                    "Bid"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn MyLotList(lots: Vec<Lot>, error: RwSignal<Option<String>>) -> impl IntoView {
    if lots.is_empty() {
        return view! { <p>"You have no lots."</p> }.into_any();
    }
    view! {
        <ul class="my-lot-list">
            {lots
                .into_iter()
                .map(|lot| {
                    let lot_id = lot.id;
                    let result = RwSignal::new(Option::<String>::None);
                    let on_result = Callback::new(move |()| {
                        leptos::task::spawn_local(async move {
                            match crate::net::auction::result(lot_id).await {
                                Ok(outcome) if outcome.bidder_id != 0 => {
                                    result.set(Some(format!(
                                        "sold to account {} for {}",
                                        outcome.bidder_id,
                                        format_tokens(outcome.bid_price)
                                    )));
                                }
                                Ok(_) => result.set(Some("closed without a winner".to_owned())),
                                Err(e) => error.set(Some(e.to_string())),
                            }
                        });
                    });
                    view! {
                        <li class="my-lot-list__item">
                            <span>{lot.title.clone()}</span>
                            <span>{format_tokens(lot.current_price)}</span>
                            <button class="btn" on:click=move |_| on_result.run(())>
                                "Result"
                            </button>
                            <Show when=move || result.get().is_some()>
                                <span class="my-lot-list__result">
                                    {move || result.get().unwrap_or_default()}
                                </span>
                            </Show>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[component]
fn CreateLotForm(error: RwSignal<Option<String>>, on_change: Callback<()>) -> impl IntoView {
    let asset_id = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let reserve = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let Ok(reserve_price) = reserve.get().trim().parse::<i64>() else {
            error.set(Some("reserve price must be a number".to_owned()));
            return;
        };
        let request = CreateLotRequest {
            asset_id: asset_id.get().trim().to_owned(),
            title: title.get().trim().to_owned(),
            reserve_price,
            start_time: start_time.get(),
            deadline: deadline.get(),
        };
        if request.asset_id.is_empty() || request.title.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::auction::create(&request).await {
                Ok(()) => {
                    error.set(None);
                    on_change.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <div class="lot-form">
            <input
                type="text"
                placeholder="Asset id"
                prop:value=move || asset_id.get()
                on:input=move |ev| asset_id.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Reserve price"
                prop:value=move || reserve.get()
                on:input=move |ev| reserve.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Start (RFC 3339)"
                prop:value=move || start_time.get()
                on:input=move |ev| start_time.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Deadline (RFC 3339)"
                prop:value=move || deadline.get()
                on:input=move |ev| deadline.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Create lot"
            </button>
        </div>
    }
}
