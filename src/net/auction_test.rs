use serde_json::json;

use super::*;
use crate::net::http::Method;
use crate::net::types::CreateLotRequest;

// =============================================================
// Lot creation and bidding
// =============================================================

#[test]
fn create_serializes_lot_request() {
    let descriptor = create_request(&CreateLotRequest {
        asset_id: "asset-1".to_owned(),
        title: "Sunset".to_owned(),
        reserve_price: 100,
        start_time: "2024-04-01T00:00:00Z".to_owned(),
        deadline: "2024-04-02T00:00:00Z".to_owned(),
    });
    assert_eq!(descriptor.method, Method::Post);
    assert_eq!(descriptor.path, "/auction/create");
    let body = descriptor.body.unwrap();
    assert_eq!(body["assetId"], "asset-1");
    assert_eq!(body["reservePrice"], 100);
}

#[test]
fn bid_posts_lot_and_price() {
    let descriptor = bid_request(4, 120);
    assert_eq!(descriptor.path, "/auction/submitBid");
    assert_eq!(descriptor.body, Some(json!({"lotId": 4, "bidPrice": 120})));
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn lot_queries_use_capital_id_key() {
    let bid = RequestDescriptor::get("/auction/getBidPrice").query("lotID", 4);
    let result = RequestDescriptor::get("/auction/getAuctionResult").query("lotID", 4);
    assert_eq!(bid.query, vec![("lotID", "4".to_owned())]);
    assert_eq!(result.query, vec![("lotID", "4".to_owned())]);
}
