//! Persisted session store.
//!
//! Wraps the browser's `localStorage` with explicit get/set/clear
//! operations. The token is written only on login and removed on logout or
//! when the backend answers 401; the guard and the HTTP layer treat its
//! presence as "authenticated". Requires a browser environment; native
//! builds read as empty.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "userToken";

/// `localStorage` key holding the cached account profile.
pub const USER_KEY: &str = "userInfo";

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored session token.
pub fn token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Store the session token.
pub fn set_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Read the cached account profile, if one is stored and parseable.
pub fn user() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let raw = storage().and_then(|s| s.get_item(USER_KEY).ok().flatten())?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Cache the account profile alongside the token.
pub fn set_user(user: &User) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
    }
}

/// Remove the token and the cached profile. Used by logout and by the
/// forced logout on 401.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
