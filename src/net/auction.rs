//! Auction endpoints: lots, bids, and results.

#[cfg(test)]
#[path = "auction_test.rs"]
mod auction_test;

use serde_json::json;

use super::http::{self, ApiError, RequestDescriptor};
use super::types::{AuctionResult, CreateLotRequest, Lot};

/// Put an asset up for auction.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create(request: &CreateLotRequest) -> Result<(), ApiError> {
    http::send_unit(create_request(request)).await
}

fn create_request(request: &CreateLotRequest) -> RequestDescriptor {
    RequestDescriptor::post("/auction/create")
        .json(serde_json::to_value(request).unwrap_or_default())
}

/// List all lots.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn lots() -> Result<Vec<Lot>, ApiError> {
    http::send(RequestDescriptor::get("/auction/getAllLots")).await
}

/// List the authenticated account's own lots.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn lots_by_seller() -> Result<Vec<Lot>, ApiError> {
    http::send(RequestDescriptor::get("/auction/getLotBySellerID")).await
}

/// Bid on a lot.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn bid(lot_id: i64, bid_price: i64) -> Result<(), ApiError> {
    http::send_unit(bid_request(lot_id, bid_price)).await
}

fn bid_request(lot_id: i64, bid_price: i64) -> RequestDescriptor {
    RequestDescriptor::post("/auction/submitBid")
        .json(json!({"lotId": lot_id, "bidPrice": bid_price}))
}

/// The authenticated account's current bid on a lot.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn bid_price(lot_id: i64) -> Result<i64, ApiError> {
    http::send(RequestDescriptor::get("/auction/getBidPrice").query("lotID", lot_id)).await
}

/// The highest bid on a lot so far.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn max_bid_price(lot_id: i64) -> Result<i64, ApiError> {
    http::send(RequestDescriptor::get("/auction/getMaxBidPrice").query("lotID", lot_id)).await
}

/// The outcome of a finished auction.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn result(lot_id: i64) -> Result<AuctionResult, ApiError> {
    http::send(RequestDescriptor::get("/auction/getAuctionResult").query("lotID", lot_id)).await
}
