use futures::executor::block_on;

use super::*;
use crate::net::testing::{ScriptedTransport, TEST_BASE_URL, client_with};
use crate::util::storage::{AUTH_TOKEN_KEY, KeyValueStore, MemoryStorage};

fn ok() -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse::new(200, "{}"))
}

// =============================================================
// Interceptor
// =============================================================

#[test]
fn every_request_carries_the_persisted_token() {
    let storage = Arc::new(MemoryStorage::with_entries([(AUTH_TOKEN_KEY, "tok-1")]));
    let transport = ScriptedTransport::replying([ok(), ok()]);
    let client = client_with(storage, transport.clone());

    block_on(client.get("/post/getposts")).unwrap();
    block_on(client.delete("/comment/deleteComment/c-1")).unwrap();

    for request in transport.requests() {
        assert_eq!(request.header(ACCESS_TOKEN_HEADER), Some("tok-1"));
    }
}

#[test]
fn missing_token_sends_empty_header() {
    let transport = ScriptedTransport::replying([ok()]);
    let client = client_with(MemoryStorage::shared(), transport.clone());

    block_on(client.get("/featured/get")).unwrap();

    assert_eq!(transport.last_request().header(ACCESS_TOKEN_HEADER), Some(""));
}

#[test]
fn token_is_read_at_send_time() {
    let storage = MemoryStorage::shared();
    let transport = ScriptedTransport::replying([ok(), ok()]);
    let client = client_with(storage.clone(), transport.clone());

    block_on(client.get("/user/getusers")).unwrap();
    storage.set(AUTH_TOKEN_KEY, "fresh").unwrap();
    block_on(client.get("/user/getusers")).unwrap();

    let seen = transport.requests();
    assert_eq!(seen[0].header(ACCESS_TOKEN_HEADER), Some(""));
    assert_eq!(seen[1].header(ACCESS_TOKEN_HEADER), Some("fresh"));
}

#[test]
fn interceptor_replaces_caller_supplied_token_header() {
    let storage = Arc::new(MemoryStorage::with_entries([(AUTH_TOKEN_KEY, "stored")]));
    let interceptor = AccessTokenInterceptor::new(storage);
    let request = ApiRequest::new(Method::Get, "http://x").with_header(ACCESS_TOKEN_HEADER, "spoofed");

    let request = interceptor.intercept(request).unwrap();

    assert_eq!(request.header(ACCESS_TOKEN_HEADER), Some("stored"));
    assert_eq!(request.headers.len(), 1);
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn paths_resolve_against_base_url() {
    let transport = ScriptedTransport::replying([ok()]);
    let client = client_with(MemoryStorage::shared(), transport.clone());

    block_on(client.get("/post/getposts?limit=3")).unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, format!("{TEST_BASE_URL}/post/getposts?limit=3"));
    assert_eq!(request.body, None);
}

#[test]
fn trailing_slash_on_base_url_is_dropped() {
    let client = ApiClient::new("http://api.test/api/", MemoryStorage::shared(), Arc::new(OfflineTransport));
    assert_eq!(client.base_url(), "http://api.test/api");
    assert_eq!(client.url("/featured/get"), "http://api.test/api/featured/get");
}

#[test]
fn post_encodes_json_body() {
    let transport = ScriptedTransport::replying([ok()]);
    let client = client_with(MemoryStorage::shared(), transport.clone());

    block_on(client.post("/comment/create", &serde_json::json!({ "content": "hi" }))).unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, Some(serde_json::json!({ "content": "hi" })));
}

// =============================================================
// Failure propagation
// =============================================================

#[test]
fn non_success_status_becomes_status_error() {
    let transport = ScriptedTransport::replying([Ok(ApiResponse::new(403, "forbidden"))]);
    let client = client_with(MemoryStorage::shared(), transport);

    let err = block_on(client.get("/user/getusers")).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 403, body: "forbidden".to_owned() });
}

#[test]
fn transport_error_is_returned_unchanged() {
    let transport = ScriptedTransport::failing(ApiError::Transport("reset".to_owned()));
    let client = client_with(MemoryStorage::shared(), transport);

    let err = block_on(client.put("/comment/likeComment/c-1", &serde_json::json!({}))).unwrap_err();

    assert_eq!(err, ApiError::Transport("reset".to_owned()));
}

#[test]
fn offline_transport_refuses_requests() {
    let client = ApiClient::new(TEST_BASE_URL, MemoryStorage::shared(), Arc::new(OfflineTransport));
    assert_eq!(block_on(client.get("/featured/get")).unwrap_err(), ApiError::Unavailable);
}

// =============================================================
// Response helpers
// =============================================================

#[test]
fn blank_responses() {
    assert!(ApiResponse::new(200, "").is_blank());
    assert!(ApiResponse::new(200, " null ").is_blank());
    assert!(!ApiResponse::new(200, "[]").is_blank());
}

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(Method::Delete.to_string(), "DELETE");
}
