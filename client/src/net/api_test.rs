use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::http::{ACCESS_TOKEN_HEADER, ApiResponse, Method};
use crate::net::testing::{ScriptedTransport, TEST_BASE_URL, client_with};
use crate::net::types::CurrentUser;
use crate::util::storage::{AUTH_TOKEN_KEY, MemoryStorage};

fn url(path: &str) -> String {
    format!("{TEST_BASE_URL}{path}")
}

fn post_list_json() -> serde_json::Value {
    serde_json::json!({
        "posts": [{ "_id": "p-1", "slug": "hello", "title": "Hello" }],
        "totalPosts": 1,
        "lastMonthPosts": 1
    })
}

// =============================================================
// Silent-failure reads
// =============================================================

#[test]
fn read_resolves_to_failed_instead_of_rejecting() {
    let transport = ScriptedTransport::failing(ApiError::Transport("offline".to_owned()));
    let api = client_with(MemoryStorage::shared(), transport);

    let outcome = block_on(get_post_by_slug(&api, "hello"));

    assert_eq!(outcome, ReadOutcome::Failed(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome.into_option(), None);
}

#[test]
fn read_swallows_server_errors() {
    let transport = ScriptedTransport::replying([Ok(ApiResponse::new(500, "boom"))]);
    let api = client_with(MemoryStorage::shared(), transport);

    let outcome = block_on(get_recent_posts(&api));

    assert!(outcome.is_failed());
}

#[test]
fn read_distinguishes_empty_body_from_failure() {
    let transport = ScriptedTransport::replying([Ok(ApiResponse::new(200, ""))]);
    let api = client_with(MemoryStorage::shared(), transport);

    let outcome = block_on(get_featured_post(&api));

    assert_eq!(outcome, ReadOutcome::Empty);
    assert!(!outcome.is_failed());
}

#[test]
fn read_reports_undecodable_body_as_failure() {
    let transport = ScriptedTransport::replying([Ok(ApiResponse::new(200, "<html>"))]);
    let api = client_with(MemoryStorage::shared(), transport);

    assert!(block_on(get_users(&api)).is_failed());
}

#[test]
fn read_decodes_post_list() {
    let transport = ScriptedTransport::ok_json(post_list_json());
    let api = client_with(MemoryStorage::shared(), transport.clone());

    let list = block_on(get_post_by_slug(&api, "hello")).into_option().unwrap();

    assert_eq!(list.posts[0].slug, "hello");
    assert_eq!(list.total_posts, 1);
    assert_eq!(transport.last_request().url, url("/post/getposts?slug=hello"));
}

#[test]
fn read_outcome_map_preserves_variant() {
    let loaded: ReadOutcome<u8> = ReadOutcome::Loaded(2);
    assert_eq!(loaded.map(|n| n * 2), ReadOutcome::Loaded(4));
    let empty: ReadOutcome<u8> = ReadOutcome::Empty;
    assert_eq!(empty.map(|n| n * 2), ReadOutcome::Empty);
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn read_endpoints_build_expected_urls() {
    let transport = ScriptedTransport::replying(std::iter::repeat_with(|| Ok(ApiResponse::new(200, "{}"))).take(11));
    let api = client_with(MemoryStorage::shared(), transport.clone());

    block_on(async {
        let _ = get_recent_posts(&api).await;
        let _ = get_posts_by_query(&api, "searchTerm=rust&sort=desc").await;
        let _ = get_posts(&api).await;
        let _ = get_all_posts(&api, 9).await;
        let _ = fetch_post_by_id(&api, "p-1").await;
        let _ = get_featured_post(&api).await;
        let _ = get_comments(&api).await;
        let _ = get_all_comments(&api, 18).await;
        let _ = get_users(&api).await;
        let _ = get_all_users(&api, 0).await;
        let _ = get_post_comments(&api, Some("p-1")).await;
    });

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            url("/post/getposts?limit=3"),
            url("/post/getposts?searchTerm=rust&sort=desc"),
            url("/post/getposts?limit=5"),
            url("/post/getposts?startIndex=9"),
            url("/post/getposts?postId=p-1"),
            url("/featured/get"),
            url("/comment/getcomments?limit=5"),
            url("/comment/getcomments?startIndex=18"),
            url("/user/getusers?limit=5"),
            url("/user/getusers?startIndex=0"),
            url("/comment/getPostComments/p-1"),
        ]
    );
}

#[test]
fn post_comments_without_id_requests_null_segment() {
    let transport = ScriptedTransport::ok_json(serde_json::json!([]));
    let api = client_with(MemoryStorage::shared(), transport.clone());

    let comments = block_on(get_post_comments(&api, None)).into_option().unwrap();

    assert!(comments.is_empty());
    assert_eq!(transport.last_request().url, url("/comment/getPostComments/null"));
}

#[test]
fn write_endpoints_use_expected_verbs_and_paths() {
    let transport = ScriptedTransport::replying(std::iter::repeat_with(|| Ok(ApiResponse::new(200, "{}"))).take(7));
    let api = client_with(MemoryStorage::shared(), transport.clone());
    let payload = PostPayload { title: "T".to_owned(), ..PostPayload::default() };
    let comment = CommentPayload { content: "c".to_owned(), post_id: "p-1".to_owned(), user_id: "u-1".to_owned() };

    block_on(async {
        create_post(&api, &payload).await.unwrap();
        update_post(&api, &payload, "p-1", "u-1").await.unwrap();
        delete_post(&api, "u-1", "p-1").await.unwrap();
        create_comment(&api, &comment).await.unwrap();
        like_comment(&api, "c-1").await.unwrap();
        delete_comment(&api, "c-1").await.unwrap();
        delete_user(&api, "u-2").await.unwrap();
    });

    let seen: Vec<(Method, String)> = transport.requests().into_iter().map(|r| (r.method, r.url)).collect();
    assert_eq!(
        seen,
        vec![
            (Method::Post, url("/post/create")),
            (Method::Put, url("/post/updatepost/p-1/u-1")),
            (Method::Delete, url("/post/deletepost/p-1/u-1")),
            (Method::Post, url("/comment/create")),
            (Method::Put, url("/comment/likeComment/c-1")),
            (Method::Delete, url("/comment/deleteComment/c-1")),
            (Method::Delete, url("/user/delete/u-2")),
        ]
    );
}

#[test]
fn like_comment_sends_empty_object_body() {
    let transport = ScriptedTransport::ok_json(serde_json::json!({ "_id": "c-1", "numberOfLikes": 1 }));
    let api = client_with(MemoryStorage::shared(), transport.clone());

    let comment = block_on(like_comment(&api, "c-1")).unwrap();

    assert_eq!(comment.number_of_likes, 1);
    assert_eq!(transport.last_request().body, Some(serde_json::json!({})));
}

// =============================================================
// Propagating writes
// =============================================================

#[test]
fn write_failure_propagates_to_caller() {
    let transport = ScriptedTransport::replying([Ok(ApiResponse::new(403, r#"{"message":"not allowed"}"#))]);
    let api = client_with(MemoryStorage::shared(), transport);

    let err = block_on(delete_post(&api, "u-1", "p-1")).unwrap_err();

    assert_eq!(err.user_message(), "not allowed");
}

#[test]
fn write_transport_failure_propagates_unchanged() {
    let transport = ScriptedTransport::failing(ApiError::Transport("reset".to_owned()));
    let api = client_with(MemoryStorage::shared(), transport);

    let err = block_on(create_comment(
        &api,
        &CommentPayload { content: "c".to_owned(), post_id: "p".to_owned(), user_id: "u".to_owned() },
    ))
    .unwrap_err();

    assert_eq!(err, ApiError::Transport("reset".to_owned()));
}

// =============================================================
// Auth endpoints
// =============================================================

#[test]
fn sign_in_posts_credentials_and_decodes_session() {
    let transport = ScriptedTransport::ok_json(serde_json::json!({
        "_id": "u-1",
        "username": "ada",
        "email": "ada@example.com",
        "isAdmin": false,
        "token": "tok"
    }));
    let storage = Arc::new(MemoryStorage::with_entries([(AUTH_TOKEN_KEY, "")]));
    let api = client_with(storage, transport.clone());
    let credentials = SignInRequest { email: "ada@example.com".to_owned(), password: "pw".to_owned() };

    let session = block_on(sign_in(&api, &credentials)).unwrap();

    assert_eq!(session.user, CurrentUser {
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        id: "u-1".to_owned(),
        ..CurrentUser::default()
    });
    assert_eq!(session.token.as_deref(), Some("tok"));
    let request = transport.last_request();
    assert_eq!(request.url, url("/auth/signin"));
    assert_eq!(request.header(ACCESS_TOKEN_HEADER), Some(""));
    assert_eq!(request.body, Some(serde_json::json!({ "email": "ada@example.com", "password": "pw" })));
}

#[test]
fn sign_up_and_sign_out_hit_auth_routes() {
    let transport = ScriptedTransport::replying([Ok(ApiResponse::new(201, "\"ok\"")), Ok(ApiResponse::new(200, ""))]);
    let api = client_with(MemoryStorage::shared(), transport.clone());
    let account = SignUpRequest {
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
    };

    block_on(sign_up(&api, &account)).unwrap();
    block_on(sign_out(&api)).unwrap();

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec![url("/auth/signup"), url("/user/signout")]);
}
