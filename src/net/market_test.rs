use serde_json::json;

use super::*;
use crate::net::http::{API_BASE, Method, build_url};
use crate::net::types::CreateListingRequest;

// =============================================================
// Listings
// =============================================================

#[test]
fn listings_paginate_with_page_and_page_size() {
    let descriptor = listings_request(2, 25);
    assert_eq!(
        build_url(API_BASE, &descriptor.path, &descriptor.query),
        "/api/market/listings?page=2&pageSize=25"
    );
}

#[test]
fn create_listing_serializes_request_body() {
    let descriptor = create_listing_request(&CreateListingRequest {
        asset_id: "asset-1".to_owned(),
        title: "Sunset".to_owned(),
        price: 500,
        deadline: None,
        buy_now_price: Some(900),
    });
    assert_eq!(descriptor.method, Method::Post);
    assert_eq!(descriptor.path, "/market/listing");
    assert_eq!(
        descriptor.body,
        Some(json!({"assetId": "asset-1", "title": "Sunset", "price": 500, "buyNowPrice": 900}))
    );
}

// =============================================================
// Offers
// =============================================================

#[test]
fn create_offer_posts_listing_and_price() {
    let descriptor = create_offer_request(3, 450);
    assert_eq!(descriptor.path, "/market/offer");
    assert_eq!(descriptor.body, Some(json!({"listingId": 3, "offerPrice": 450})));
}

#[test]
fn accept_and_cancel_address_the_offer_in_the_path() {
    let accept = RequestDescriptor::post(format!("/market/offer/{}/accept", 8));
    let cancel = RequestDescriptor::post(format!("/market/offer/{}/cancel", 8));
    assert_eq!(accept.path, "/market/offer/8/accept");
    assert_eq!(cancel.path, "/market/offer/8/cancel");
    assert!(accept.body.is_none());
}

#[test]
fn buy_now_posts_listing_id() {
    let descriptor = buy_now_request(3);
    assert_eq!(descriptor.path, "/market/buy");
    assert_eq!(descriptor.body, Some(json!({"listingId": 3})));
}
