//! Market endpoints: listings, offers, and buy-now.

#[cfg(test)]
#[path = "market_test.rs"]
mod market_test;

use serde_json::json;

use super::http::{self, ApiError, RequestDescriptor};
use super::types::{CreateListingRequest, Listing, Offer, Page};

/// Put an asset up for sale.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_listing(request: &CreateListingRequest) -> Result<(), ApiError> {
    http::send_unit(create_listing_request(request)).await
}

fn create_listing_request(request: &CreateListingRequest) -> RequestDescriptor {
    RequestDescriptor::post("/market/listing")
        .json(serde_json::to_value(request).unwrap_or_default())
}

/// One page of open listings. Public — works without a session.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn listings(page: u32, page_size: u32) -> Result<Page<Listing>, ApiError> {
    http::send(listings_request(page, page_size)).await
}

fn listings_request(page: u32, page_size: u32) -> RequestDescriptor {
    RequestDescriptor::get("/market/listings")
        .query("page", page)
        .query("pageSize", page_size)
}

/// Offer a price against a listing.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create_offer(listing_id: i64, offer_price: i64) -> Result<(), ApiError> {
    http::send_unit(create_offer_request(listing_id, offer_price)).await
}

fn create_offer_request(listing_id: i64, offer_price: i64) -> RequestDescriptor {
    RequestDescriptor::post("/market/offer")
        .json(json!({"listingId": listing_id, "offerPrice": offer_price}))
}

/// Accept an offer on one of the caller's listings.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn accept_offer(offer_id: i64) -> Result<(), ApiError> {
    http::send_unit(RequestDescriptor::post(format!("/market/offer/{offer_id}/accept"))).await
}

/// Withdraw one of the caller's pending offers.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn cancel_offer(offer_id: i64) -> Result<(), ApiError> {
    http::send_unit(RequestDescriptor::post(format!("/market/offer/{offer_id}/cancel"))).await
}

/// One page of the caller's own offers.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn my_offers(page: u32, page_size: u32) -> Result<Page<Offer>, ApiError> {
    http::send(
        RequestDescriptor::get("/market/offers/mine")
            .query("page", page)
            .query("pageSize", page_size),
    )
    .await
}

/// Buy a listing outright at its buy-now price.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn buy_now(listing_id: i64) -> Result<(), ApiError> {
    http::send_unit(buy_now_request(listing_id)).await
}

fn buy_now_request(listing_id: i64) -> RequestDescriptor {
    RequestDescriptor::post("/market/buy").json(json!({"listingId": listing_id}))
}
