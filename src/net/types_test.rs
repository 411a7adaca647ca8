use serde_json::json;

use super::*;

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_parses_code_message_data() {
    let envelope: Envelope =
        serde_json::from_value(json!({"code": 200, "message": "ok", "data": [1, 2]})).unwrap();
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.message, "ok");
    assert_eq!(envelope.data, json!([1, 2]));
}

#[test]
fn envelope_defaults_missing_message_and_data() {
    let envelope: Envelope = serde_json::from_value(json!({"code": 200})).unwrap();
    assert!(envelope.message.is_empty());
    assert!(envelope.data.is_null());
}

// =============================================================
// Account types
// =============================================================

#[test]
fn user_parses_backend_field_names() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "username": "alice",
        "email": "alice@example.com",
        "avatarURL": "/public/alice.png",
        "org": [2],
        "createTime": "2024-03-01T09:30:00Z",
        "updateTime": "2024-03-02T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.avatar_url, "/public/alice.png");
    assert_eq!(user.org, vec![2]);
    assert!(user.create_time.is_some());
}

#[test]
fn login_payload_carries_token_and_user() {
    let payload: LoginPayload = serde_json::from_value(json!({
        "token": "T",
        "user": {"id": 1, "username": "alice", "org": [2]}
    }))
    .unwrap();
    assert_eq!(payload.token, "T");
    assert_eq!(payload.user.username, "alice");
}

#[test]
fn profile_update_skips_unset_fields() {
    let update = ProfileUpdate { email: Some("new@example.com".to_owned()), password: None };
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({"email": "new@example.com"}));
}

// =============================================================
// Wallet types
// =============================================================

#[test]
fn transfer_uses_lower_camel_ids() {
    let transfer: Transfer = serde_json::from_value(json!({
        "id": "tx-1",
        "senderId": 1,
        "recipientId": 7,
        "amount": 100,
        "time": "2024-03-01T09:30:00Z"
    }))
    .unwrap();
    assert_eq!(transfer.sender_id, 1);
    assert_eq!(transfer.recipient_id, 7);
}

#[test]
fn withholding_uses_capital_id_suffix() {
    let holding: WithHolding = serde_json::from_value(json!({
        "id": "wh-1",
        "accountID": 7,
        "listingID": "listing-9",
        "amount": 25,
        "timeStamp": "2024-03-01T09:30:00Z"
    }))
    .unwrap();
    assert_eq!(holding.account_id, 7);
    assert_eq!(holding.listing_id, "listing-9");
}

// =============================================================
// Market and auction types
// =============================================================

#[test]
fn listing_tolerates_missing_optionals() {
    let listing: Listing = serde_json::from_value(json!({
        "id": 3,
        "assetId": "asset-1",
        "title": "Sunset",
        "price": 500,
        "sellerId": 2,
        "status": "OPEN"
    }))
    .unwrap();
    assert!(listing.deadline.is_none());
    assert!(listing.buy_now_price.is_none());
}

#[test]
fn page_defaults_to_empty() {
    let page: Page<Listing> = serde_json::from_value(json!({"total": 0})).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn create_listing_request_serializes_wire_names() {
    let request = CreateListingRequest {
        asset_id: "asset-1".to_owned(),
        title: "Sunset".to_owned(),
        price: 500,
        deadline: Some("2024-04-01T00:00:00Z".to_owned()),
        buy_now_price: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"assetId": "asset-1", "title": "Sunset", "price": 500, "deadline": "2024-04-01T00:00:00Z"})
    );
}

#[test]
fn create_lot_request_serializes_wire_names() {
    let request = CreateLotRequest {
        asset_id: "asset-1".to_owned(),
        title: "Sunset".to_owned(),
        reserve_price: 100,
        start_time: "2024-04-01T00:00:00Z".to_owned(),
        deadline: "2024-04-02T00:00:00Z".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["assetId"], "asset-1");
    assert_eq!(value["reservePrice"], 100);
    assert_eq!(value["startTime"], "2024-04-01T00:00:00Z");
}

#[test]
fn auction_result_without_winner_defaults_bidder() {
    let result: AuctionResult =
        serde_json::from_value(json!({"lotId": 4, "bidPrice": 0})).unwrap();
    assert_eq!(result.bidder_id, 0);
}
