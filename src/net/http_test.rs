use serde_json::json;

use super::*;

// =============================================================
// Request descriptors
// =============================================================

#[test]
fn get_descriptor_has_no_body() {
    let descriptor = RequestDescriptor::get("/wallet/balance");
    assert_eq!(descriptor.method, Method::Get);
    assert_eq!(descriptor.path, "/wallet/balance");
    assert!(descriptor.query.is_empty());
    assert!(descriptor.body.is_none());
}

#[test]
fn post_descriptor_carries_json_body() {
    let descriptor =
        RequestDescriptor::post("/wallet/transfer").json(json!({"recipientId": 7, "amount": 100}));
    assert_eq!(descriptor.method, Method::Post);
    assert_eq!(descriptor.body, Some(json!({"recipientId": 7, "amount": 100})));
}

#[test]
fn query_parameters_accumulate_in_order() {
    let descriptor = RequestDescriptor::get("/market/listings")
        .query("page", 2)
        .query("pageSize", 10);
    assert_eq!(
        descriptor.query,
        vec![("page", "2".to_owned()), ("pageSize", "10".to_owned())]
    );
}

// =============================================================
// URL construction
// =============================================================

#[test]
fn build_url_without_query() {
    assert_eq!(build_url(API_BASE, "/account/profile", &[]), "/api/account/profile");
}

#[test]
fn build_url_with_query() {
    let query = vec![("id", "42".to_owned())];
    assert_eq!(build_url(API_BASE, "/asset/getAssetByID", &query), "/api/asset/getAssetByID?id=42");
}

#[test]
fn build_url_joins_multiple_parameters() {
    let query = vec![("page", "1".to_owned()), ("pageSize", "10".to_owned())];
    assert_eq!(
        build_url(API_BASE, "/market/listings", &query),
        "/api/market/listings?page=1&pageSize=10"
    );
}

#[test]
fn build_url_percent_encodes_values() {
    let query = vec![("id", "a b&c".to_owned())];
    assert_eq!(build_url(API_BASE, "/asset/getAssetByID", &query), "/api/asset/getAssetByID?id=a%20b%26c");
}

// =============================================================
// Bearer-token injection
// =============================================================

#[test]
fn login_and_register_are_auth_exempt() {
    assert!(is_auth_exempt("/account/login"));
    assert!(is_auth_exempt("/account/register"));
}

#[test]
fn other_paths_are_not_exempt() {
    assert!(!is_auth_exempt("/account/profile"));
    assert!(!is_auth_exempt("/wallet/balance"));
    assert!(!is_auth_exempt("/account/logout"));
}

#[test]
fn exempt_paths_never_carry_a_token() {
    assert_eq!(authorization("/account/login", Some("T")), None);
    assert_eq!(authorization("/account/register", Some("T")), None);
}

#[test]
fn bearer_header_is_attached_when_token_present() {
    assert_eq!(authorization("/wallet/balance", Some("T")), Some("Bearer T".to_owned()));
}

#[test]
fn no_header_without_a_token() {
    assert_eq!(authorization("/wallet/balance", None), None);
}

// =============================================================
// Envelope unwrapping and error normalization
// =============================================================

#[test]
fn success_envelope_unwraps_to_data() {
    let body = json!({"code": 200, "message": "ok", "data": {"balance": 50}});
    assert_eq!(unwrap_envelope(200, Some(body)), Ok(json!({"balance": 50})));
}

#[test]
fn envelope_error_code_maps_to_backend_error() {
    let body = json!({"code": 500, "message": "insufficient balance", "data": null});
    assert_eq!(
        unwrap_envelope(200, Some(body)),
        Err(ApiError::Backend { status: 500, message: "insufficient balance".to_owned() })
    );
}

#[test]
fn bare_payload_passes_through() {
    let body = json!({"avatarURL": "/public/a.png"});
    assert_eq!(unwrap_envelope(200, Some(body.clone())), Ok(body));
}

#[test]
fn http_401_is_unauthorized_regardless_of_body() {
    let body = json!({"code": 401, "message": "token expired"});
    assert_eq!(unwrap_envelope(401, Some(body)), Err(ApiError::Unauthorized));
    assert_eq!(unwrap_envelope(401, None), Err(ApiError::Unauthorized));
}

#[test]
fn non_2xx_with_payload_keeps_backend_message() {
    let body = json!({"code": 500, "message": "mint requires a financial org"});
    assert_eq!(
        unwrap_envelope(500, Some(body)),
        Err(ApiError::Backend { status: 500, message: "mint requires a financial org".to_owned() })
    );
}

#[test]
fn non_2xx_without_payload_is_generic_failure() {
    assert_eq!(
        unwrap_envelope(502, None),
        Err(ApiError::Backend { status: 502, message: "request failed".to_owned() })
    );
}

#[test]
fn empty_response_body_is_a_decode_error() {
    assert!(matches!(unwrap_envelope(204, None), Err(ApiError::Decode(_))));
}

#[test]
fn backend_error_displays_its_message() {
    let err = ApiError::Backend { status: 500, message: "listing closed".to_owned() };
    assert_eq!(err.to_string(), "listing closed");
}
