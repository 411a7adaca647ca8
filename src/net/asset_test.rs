use serde_json::json;

use super::*;
use crate::net::http::{API_BASE, Method, build_url};

// =============================================================
// Lookups
// =============================================================

#[test]
fn by_id_issues_get_with_id_query() {
    let descriptor = by_id_request("42");
    assert_eq!(descriptor.method, Method::Get);
    assert_eq!(
        build_url(API_BASE, &descriptor.path, &descriptor.query),
        "/api/asset/getAssetByID?id=42"
    );
}

#[test]
fn by_id_passes_identifier_through_unchanged() {
    let descriptor = by_id_request("asset:weird id");
    assert_eq!(descriptor.query, vec![("id", "asset:weird id".to_owned())]);
}

#[test]
fn author_and_owner_queries_use_distinct_keys() {
    let by_author = RequestDescriptor::get("/asset/getAssetByAuthorID").query("authorId", 7);
    let by_owner = RequestDescriptor::get("/asset/getAssetByOwnerID").query("ownerId", 7);
    assert_eq!(by_author.query, vec![("authorId", "7".to_owned())]);
    assert_eq!(by_owner.query, vec![("ownerId", "7".to_owned())]);
}

// =============================================================
// Transfer
// =============================================================

#[test]
fn transfer_posts_new_owner() {
    let descriptor = transfer_request("asset-1", 9);
    assert_eq!(descriptor.method, Method::Post);
    assert_eq!(descriptor.path, "/asset/transfer");
    assert_eq!(descriptor.body, Some(json!({"id": "asset-1", "newOwnerId": 9})));
}
