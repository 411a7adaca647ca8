//! Wire types shared with the Bazaar backend.
//!
//! Field names follow the backend schema exactly, including its historical
//! casing quirks (`recipientId` on transfers, `accountID`/`listingID` on
//! withholdings). Each endpoint's casing is independently authoritative;
//! do not unify them without confirming the backend schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard backend response envelope. `code` mirrors the HTTP status;
/// `200` marks success and `data` carries the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

/// A platform account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "avatarURL", default)]
    pub avatar_url: String,
    /// Organization codes; see [`crate::util::format::org_label`].
    #[serde(default)]
    pub org: Vec<i32>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
}

/// Payload of a successful login: the session token plus the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: User,
}

/// Profile fields the backend accepts for update; omitted fields are left
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// An NFT-style asset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_name: String,
    pub author_id: i64,
    pub owner_id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time_stamp: Option<DateTime<Utc>>,
}

/// A completed wallet-to-wallet transfer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub amount: i64,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// Funds withheld from a wallet while an offer is pending.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithHolding {
    pub id: String,
    #[serde(rename = "accountID")]
    pub account_id: i64,
    #[serde(rename = "listingID")]
    pub listing_id: String,
    pub amount: i64,
    #[serde(rename = "timeStamp", default)]
    pub time_stamp: Option<DateTime<Utc>>,
}

/// One direct message between two accounts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub content: String,
    #[serde(default)]
    pub time_stamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_read: bool,
}

/// A conversation summary, ordered by most recent activity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

/// A market listing. `status` is one of `OPEN`, `SOLD`, `CLOSED`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub asset_id: String,
    pub title: String,
    pub price: i64,
    pub seller_id: i64,
    pub status: String,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reserve_price: Option<i64>,
    #[serde(default)]
    pub buy_now_price: Option<i64>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
}

/// An offer made against a listing. `status` is one of `PENDING`,
/// `ACCEPTED`, `REJECTED`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,
    pub listing_id: i64,
    pub bidder_id: i64,
    pub offer_price: i64,
    pub status: String,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
}

/// One page of a listing or offer query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

/// Body for creating a market listing. `deadline` is an RFC 3339 string
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub asset_id: String,
    pub title: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_now_price: Option<i64>,
}

/// An auction lot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: i64,
    pub asset_id: String,
    pub title: String,
    pub reserve_price: i64,
    pub current_price: i64,
    pub seller_id: i64,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid: bool,
}

/// Body for creating an auction lot. Times are RFC 3339 strings passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLotRequest {
    pub asset_id: String,
    pub title: String,
    pub reserve_price: i64,
    pub start_time: String,
    pub deadline: String,
}

/// Outcome of a finished auction; `bidder_id` of `0` marks a lot that
/// closed without a winning bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionResult {
    pub lot_id: i64,
    pub bid_price: i64,
    #[serde(default)]
    pub bidder_id: i64,
}
