//! Asset endpoints: minting, lookup, and ownership transfer.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use serde_json::json;

use super::http::{self, ApiError, RequestDescriptor};
use super::types::Asset;

/// Mint a new asset from an uploaded image plus its metadata.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
#[cfg(feature = "csr")]
pub async fn create(name: &str, description: &str, image: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
    form.append_with_str("name", name)
        .and_then(|()| form.append_with_str("description", description))
        .and_then(|()| form.append_with_blob("image", image))
        .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
    http::send_multipart(http::Method::Post, "/asset/create", form)
        .await
        .map(|_| ())
}

/// Fetch one asset by id. The id passes through unchanged.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn by_id(id: &str) -> Result<Asset, ApiError> {
    http::send(by_id_request(id)).await
}

fn by_id_request(id: &str) -> RequestDescriptor {
    RequestDescriptor::get("/asset/getAssetByID").query("id", id)
}

/// List the assets originally authored by an account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn by_author_id(author_id: i64) -> Result<Vec<Asset>, ApiError> {
    http::send(RequestDescriptor::get("/asset/getAssetByAuthorID").query("authorId", author_id))
        .await
}

/// List the assets currently owned by an account.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn by_owner_id(owner_id: i64) -> Result<Vec<Asset>, ApiError> {
    http::send(RequestDescriptor::get("/asset/getAssetByOwnerID").query("ownerId", owner_id)).await
}

/// Fetch an asset's on-chain status.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn status(id: &str) -> Result<String, ApiError> {
    http::send(RequestDescriptor::get("/asset/status").query("id", id)).await
}

/// Hand an asset to a new owner.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn transfer(id: &str, new_owner_id: i64) -> Result<(), ApiError> {
    http::send_unit(transfer_request(id, new_owner_id)).await
}

fn transfer_request(id: &str, new_owner_id: i64) -> RequestDescriptor {
    RequestDescriptor::post("/asset/transfer").json(json!({"id": id, "newOwnerId": new_owner_id}))
}
