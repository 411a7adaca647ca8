//! Wallet endpoints: balance, transfers, minting, and withholdings.
//!
//! Amounts are platform tokens. Minting is privileged: the backend rejects
//! it for accounts outside the financial organization, and no check is made
//! here.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use serde_json::json;

use super::http::{self, ApiError, RequestDescriptor};
use super::types::{Asset, Transfer, WithHolding};

/// Fetch the authenticated account's token balance.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn balance() -> Result<i64, ApiError> {
    http::send(RequestDescriptor::get("/wallet/balance")).await
}

/// Transfer tokens to another account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn transfer(recipient_id: i64, amount: i64) -> Result<(), ApiError> {
    http::send_unit(transfer_request(recipient_id, amount)).await
}

fn transfer_request(recipient_id: i64, amount: i64) -> RequestDescriptor {
    RequestDescriptor::post("/wallet/transfer")
        .json(json!({"recipientId": recipient_id, "amount": amount}))
}

/// Mint tokens into an account. Rejected by the backend for callers outside
/// the financial organization.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn mint_token(account_id: i64, amount: i64) -> Result<(), ApiError> {
    http::send_unit(mint_token_request(account_id, amount)).await
}

fn mint_token_request(account_id: i64, amount: i64) -> RequestDescriptor {
    RequestDescriptor::post("/wallet/mintToken")
        .json(json!({"accountID": account_id, "amount": amount}))
}

/// List transfers sent by the authenticated account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn transfers_by_sender() -> Result<Vec<Transfer>, ApiError> {
    http::send(RequestDescriptor::get("/wallet/transferBySenderID")).await
}

/// List transfers received by the authenticated account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn transfers_by_recipient() -> Result<Vec<Transfer>, ApiError> {
    http::send(RequestDescriptor::get("/wallet/transferByRecipientID")).await
}

/// List the assets owned by the authenticated account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn assets_by_owner() -> Result<Vec<Asset>, ApiError> {
    http::send(RequestDescriptor::get("/asset/getAssetByOwnerID")).await
}

/// The authenticated account's organization codes, projected from the
/// profile.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn current_org() -> Result<Vec<i32>, ApiError> {
    let user = super::account::profile().await?;
    Ok(user.org)
}

/// Withhold tokens against a pending listing offer.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn with_hold(listing_id: &str, amount: i64) -> Result<(), ApiError> {
    http::send_unit(with_hold_request(listing_id, amount)).await
}

fn with_hold_request(listing_id: &str, amount: i64) -> RequestDescriptor {
    RequestDescriptor::post("/wallet/withHoldAccount")
        .json(json!({"listingID": listing_id, "amount": amount}))
}

/// Release any withholding held against a listing.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn clear_with_holding(listing_id: &str) -> Result<(), ApiError> {
    http::send_unit(RequestDescriptor::post("/wallet/clearWithHolding").query("listingID", listing_id))
        .await
}

/// List withholdings against the authenticated account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn with_holdings_by_account() -> Result<Vec<WithHolding>, ApiError> {
    http::send(RequestDescriptor::get("/wallet/getWithHoldingByAccountID")).await
}

/// List withholdings against a listing.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn with_holdings_by_listing(listing_id: &str) -> Result<Vec<WithHolding>, ApiError> {
    http::send(RequestDescriptor::get("/wallet/getWithHoldingByListingID").query("listingID", listing_id))
        .await
}
