use serde_json::json;

use super::*;
use crate::net::http::Method;

// =============================================================
// Auth-exempt requests
// =============================================================

#[test]
fn login_posts_credentials() {
    let descriptor = login_request("alice", "secret");
    assert_eq!(descriptor.method, Method::Post);
    assert_eq!(descriptor.path, "/account/login");
    assert_eq!(descriptor.body, Some(json!({"username": "alice", "password": "secret"})));
}

#[test]
fn login_path_is_auth_exempt() {
    let descriptor = login_request("alice", "secret");
    assert_eq!(http::authorization(&descriptor.path, Some("T")), None);
}

#[test]
fn register_posts_account_fields() {
    let descriptor = register_request("alice", "alice@example.com", "secret", &[2]);
    assert_eq!(descriptor.path, "/account/register");
    assert_eq!(
        descriptor.body,
        Some(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret",
            "org": [2]
        }))
    );
    assert_eq!(http::authorization(&descriptor.path, Some("T")), None);
}

// =============================================================
// Profile requests
// =============================================================

#[test]
fn update_profile_sends_only_set_fields() {
    use crate::net::types::ProfileUpdate;

    let descriptor = update_profile_request(&ProfileUpdate {
        email: None,
        password: Some("hunter2".to_owned()),
    });
    assert_eq!(descriptor.method, Method::Put);
    assert_eq!(descriptor.path, "/account/profile");
    assert_eq!(descriptor.body, Some(json!({"password": "hunter2"})));
}

#[test]
fn update_org_sends_codes() {
    let descriptor = update_org_request(&[1, 3]);
    assert_eq!(descriptor.method, Method::Put);
    assert_eq!(descriptor.path, "/account/org");
    assert_eq!(descriptor.body, Some(json!({"org": [1, 3]})));
}

#[test]
fn user_name_lookup_passes_id_through() {
    let descriptor = RequestDescriptor::get("/account/userName").query("id", 42);
    assert_eq!(descriptor.query, vec![("id", "42".to_owned())]);
}
