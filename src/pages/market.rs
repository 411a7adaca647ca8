//! Market page: open listings with offer and buy-now actions, plus the
//! caller's own offers.

use leptos::prelude::*;

use crate::net::types::{Listing, Offer};
use crate::util::format::{format_timestamp, format_tokens};

const PAGE_SIZE: u32 = 10;

/// Market page — paged listings and the caller's offers.
#[component]
pub fn MarketPage() -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let error = RwSignal::new(Option::<String>::None);

    let listings = LocalResource::new(move || async move {
        crate::net::market::listings(page.get(), PAGE_SIZE).await.ok()
    });
    let my_offers = LocalResource::new(|| async {
        crate::net::market::my_offers(1, PAGE_SIZE).await.ok()
    });

    let refetch_all = Callback::new(move |()| {
        listings.refetch();
        my_offers.refetch();
    });

    view! {
        <div class="market-page">
            <h1>"Market"</h1>

            <Show when=move || error.get().is_some()>
                <p class="market-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading listings..."</p> }>
                {move || {
                    listings
                        .get()
                        .flatten()
                        .map(|page_data| {
                            let total = page_data.total;
                            view! {
                                <ListingTable
                                    listings=page_data.items
                                    error=error
                                    on_change=refetch_all
                                />
                                <div class="market-page__pager">
                                    <button
                                        class="btn"
                                        disabled=move || page.get() <= 1
                                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                                    >
                                        "Prev"
                                    </button>
                                    <span>{move || page.get()}</span>
                                    <button
                                        class="btn"
                                        disabled=move || i64::from(page.get() * PAGE_SIZE) >= total
                                        on:click=move |_| page.update(|p| *p += 1)
                                    >
                                        "Next"
                                    </button>
                                </div>
                            }
                        })
                }}
            </Suspense>

            <section class="market-page__section">
                <h2>"Your offers"</h2>
                <Suspense fallback=move || view! { <p>"Loading offers..."</p> }>
                    {move || {
                        my_offers
                            .get()
                            .flatten()
                            .map(|page_data| {
                                view! {
                                    <OfferTable
                                        offers=page_data.items
                                        error=error
                                        on_change=refetch_all
                                    />
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn ListingTable(
    listings: Vec<Listing>,
    error: RwSignal<Option<String>>,
    on_change: Callback<()>,
) -> impl IntoView {
    if listings.is_empty() {
        return view! { <p>"Nothing is listed right now."</p> }.into_any();
    }
    view! {
        <table class="listing-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Price"</th>
                    <th>"Status"</th>
                    <th>"Deadline"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {listings
                    .into_iter()
                    .map(|listing| view! { <ListingRow listing=listing error=error on_change=on_change/> })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn ListingRow(
    listing: Listing,
    error: RwSignal<Option<String>>,
    on_change: Callback<()>,
) -> impl IntoView {
    let listing_id = listing.id;
    let buy_now_price = listing.buy_now_price;
    let offer_price = RwSignal::new(String::new());

    let on_offer = Callback::new(move |()| {
        let Ok(price) = offer_price.get().trim().parse::<i64>() else {
            error.set(Some("offer price must be a number".to_owned()));
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::market::create_offer(listing_id, price).await {
                Ok(()) => {
                    error.set(None);
                    on_change.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let on_buy_now = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            match crate::net::market::buy_now(listing_id).await {
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
            <td>{listing.title.clone()}</td>
            <td>{format_tokens(listing.price)}</td>
            <td>{listing.status.clone()}</td>
            <td>{format_timestamp(listing.deadline.as_ref())}</td>
            <td>
                <input
                    class="listing-table__offer"
                    type="text"
                    placeholder="Offer"
                    prop:value=move || offer_price.get()
                    on:input=move |ev| offer_price.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| on_offer.run(())>
                    "Offer"
                </button>
                <Show when=move || buy_now_price.is_some()>
                    <button class="btn btn--primary" on:click=move |_| on_buy_now.run(())>
                        {move || {
                            format!("Buy now ({})", format_tokens(buy_now_price.unwrap_or_default()))
                        }}
                    </button>
                </Show>
            </td>
        </tr>
    }
}

#[component]
fn OfferTable(
    offers: Vec<Offer>,
    error: RwSignal<Option<String>>,
    on_change: Callback<()>,
) -> impl IntoView {
    if offers.is_empty() {
        return view! { <p>"You have no offers."</p> }.into_any();
    }
    view! {
        <table class="offer-table">
            <thead>
                <tr>
                    <th>"Listing"</th>
                    <th>"Price"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {offers
                    .into_iter()
                    .map(|offer| {
                        let offer_id = offer.id;
                        let cancellable = offer.status == "PENDING";
                        let on_cancel = Callback::new(move |()| {
                            leptos::task::spawn_local(async move {
                                match crate::net::market::cancel_offer(offer_id).await {
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
                                <td>{offer.listing_id}</td>
                                <td>{format_tokens(offer.offer_price)}</td>
                                <td>{offer.status.clone()}</td>
                                <td>
                                    <Show when=move || cancellable>
                                        <button class="btn" on:click=move |_| on_cancel.run(())>
                                            "Cancel"
                                        </button>
                                    </Show>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
