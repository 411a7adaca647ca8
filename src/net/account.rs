//! Account endpoints: registration, login/logout, profile, avatar, org.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use serde_json::json;

use super::http::{self, ApiError, RequestDescriptor};
use super::types::{LoginPayload, ProfileUpdate, User};

/// Log in and receive a session token plus the account.
///
/// The request is auth-exempt: no bearer header is attached even when a
/// stale token is stored.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn login(username: &str, password: &str) -> Result<LoginPayload, ApiError> {
    http::send(login_request(username, password)).await
}

fn login_request(username: &str, password: &str) -> RequestDescriptor {
    RequestDescriptor::post("/account/login")
        .json(json!({"username": username, "password": password}))
}

/// Register a new account under the given organization codes.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
    org: &[i32],
) -> Result<(), ApiError> {
    http::send_unit(register_request(username, email, password, org)).await
}

fn register_request(username: &str, email: &str, password: &str, org: &[i32]) -> RequestDescriptor {
    RequestDescriptor::post("/account/register")
        .json(json!({"username": username, "email": email, "password": password, "org": org}))
}

/// Invalidate the current session token on the backend.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn logout() -> Result<(), ApiError> {
    http::send_unit(RequestDescriptor::post("/account/logout")).await
}

/// Fetch the authenticated account's profile.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn profile() -> Result<User, ApiError> {
    http::send(RequestDescriptor::get("/account/profile")).await
}

/// Update profile fields; unset fields are left unchanged.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_profile(update: &ProfileUpdate) -> Result<(), ApiError> {
    http::send_unit(update_profile_request(update)).await
}

fn update_profile_request(update: &ProfileUpdate) -> RequestDescriptor {
    RequestDescriptor::put("/account/profile")
        .json(serde_json::to_value(update).unwrap_or_default())
}

/// Replace the account avatar with an uploaded image.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
#[cfg(feature = "csr")]
pub async fn update_avatar(file: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
    form.append_with_blob("avatar", file)
        .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
    http::send_multipart(http::Method::Put, "/account/avatar", form)
        .await
        .map(|_| ())
}

/// Replace the account's organization codes.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_org(org: &[i32]) -> Result<(), ApiError> {
    http::send_unit(update_org_request(org)).await
}

fn update_org_request(org: &[i32]) -> RequestDescriptor {
    RequestDescriptor::put("/account/org").json(json!({"org": org}))
}

/// Look up a username by account id. The id passes through unchanged.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn user_name_by_id(id: i64) -> Result<String, ApiError> {
    http::send(RequestDescriptor::get("/account/userName").query("id", id)).await
}

/// Fetch an account's avatar URL.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn avatar(id: i64) -> Result<String, ApiError> {
    let payload: AvatarPayload =
        http::send(RequestDescriptor::get("/account/avatar").query("id", id)).await?;
    Ok(payload.avatar_url)
}

#[derive(serde::Deserialize)]
struct AvatarPayload {
    #[serde(rename = "avatarURL")]
    avatar_url: String,
}
