//! Resource access functions: one function per REST operation.
//!
//! Every function builds a path (query strings are assembled from caller
//! values as-is, with no escaping), issues one verb through `ApiClient`, and
//! hands back the parsed body.
//!
//! ERROR HANDLING
//! ==============
//! Reads (`GET`) never fail outward. They resolve to a `ReadOutcome` that
//! keeps "the server sent nothing" (`Empty`) apart from "the request failed"
//! (`Failed`), and log the swallowed error. Callers that only want the old
//! "no value" view use `ReadOutcome::into_option`. Writes return
//! `Result<_, ApiError>` and leave failure handling to the caller.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{ApiClient, ApiResponse};
use super::types::{
    Blog, Comment, CommentList, CommentPayload, PostList, PostPayload, SessionPayload, SignInRequest,
    SignUpRequest, UserList,
};

/// Result of a read-style resource function.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadOutcome<T> {
    Loaded(T),
    /// The request succeeded but carried no document.
    Empty,
    /// The request failed; the error has already been logged.
    Failed(ApiError),
}

impl<T> ReadOutcome<T> {
    /// Collapse to "value or nothing", losing the failure distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Empty | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReadOutcome<U> {
        match self {
            Self::Loaded(value) => ReadOutcome::Loaded(f(value)),
            Self::Empty => ReadOutcome::Empty,
            Self::Failed(e) => ReadOutcome::Failed(e),
        }
    }
}

async fn read<T: DeserializeOwned>(api: &ApiClient, path: &str) -> ReadOutcome<T> {
    let resp = match api.get(path).await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("GET {path} failed: {e}");
            return ReadOutcome::Failed(e);
        }
    };
    if resp.is_blank() {
        return ReadOutcome::Empty;
    }
    match resp.json() {
        Ok(value) => ReadOutcome::Loaded(value),
        Err(e) => {
            log::warn!("GET {path} returned an unexpected body: {e}");
            ReadOutcome::Failed(e)
        }
    }
}

fn decode<T: DeserializeOwned>(resp: Result<ApiResponse, ApiError>) -> Result<T, ApiError> {
    resp?.json()
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/signin`.
///
/// # Errors
///
/// Propagates transport, status, and decode failures.
pub async fn sign_in(api: &ApiClient, credentials: &SignInRequest) -> Result<SessionPayload, ApiError> {
    decode(api.post("/auth/signin", credentials).await)
}

/// `POST /auth/signup`.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn sign_up(api: &ApiClient, account: &SignUpRequest) -> Result<(), ApiError> {
    api.post("/auth/signup", account).await.map(|_| ())
}

/// `POST /user/signout`.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn sign_out(api: &ApiClient) -> Result<(), ApiError> {
    api.post("/user/signout", &serde_json::json!({})).await.map(|_| ())
}

// =============================================================================
// POSTS
// =============================================================================

/// `GET /post/getposts?slug={slug}`.
pub async fn get_post_by_slug(api: &ApiClient, slug: &str) -> ReadOutcome<PostList> {
    read(api, &format!("/post/getposts?slug={slug}")).await
}

/// The three most recent posts.
pub async fn get_recent_posts(api: &ApiClient) -> ReadOutcome<PostList> {
    read(api, "/post/getposts?limit=3").await
}

/// `GET /post/getposts?{query}` with a caller-assembled query string.
pub async fn get_posts_by_query(api: &ApiClient, query: &str) -> ReadOutcome<PostList> {
    read(api, &format!("/post/getposts?{query}")).await
}

/// Dashboard preview: the five latest posts.
pub async fn get_posts(api: &ApiClient) -> ReadOutcome<PostList> {
    read(api, "/post/getposts?limit=5").await
}

/// One page of posts for the admin table.
pub async fn get_all_posts(api: &ApiClient, start_index: usize) -> ReadOutcome<PostList> {
    read(api, &format!("/post/getposts?startIndex={start_index}")).await
}

/// `GET /post/getposts?postId={post_id}`.
pub async fn fetch_post_by_id(api: &ApiClient, post_id: &str) -> ReadOutcome<PostList> {
    read(api, &format!("/post/getposts?postId={post_id}")).await
}

/// `GET /featured/get`.
pub async fn get_featured_post(api: &ApiClient) -> ReadOutcome<Blog> {
    read(api, "/featured/get").await
}

/// `POST /post/create`.
///
/// # Errors
///
/// Propagates transport, status, and decode failures.
pub async fn create_post(api: &ApiClient, payload: &PostPayload) -> Result<Blog, ApiError> {
    decode(api.post("/post/create", payload).await)
}

/// `PUT /post/updatepost/{post_id}/{user_id}`.
///
/// # Errors
///
/// Propagates transport, status, and decode failures.
pub async fn update_post(api: &ApiClient, payload: &PostPayload, post_id: &str, user_id: &str) -> Result<Blog, ApiError> {
    decode(api.put(&format!("/post/updatepost/{post_id}/{user_id}"), payload).await)
}

/// `DELETE /post/deletepost/{post_id}/{user_id}`.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_post(api: &ApiClient, user_id: &str, post_id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/post/deletepost/{post_id}/{user_id}")).await.map(|_| ())
}

// =============================================================================
// COMMENTS
// =============================================================================

/// `GET /comment/getPostComments/{post_id}`; a missing id is sent as `null`.
pub async fn get_post_comments(api: &ApiClient, post_id: Option<&str>) -> ReadOutcome<Vec<Comment>> {
    let post_id = post_id.unwrap_or("null");
    read(api, &format!("/comment/getPostComments/{post_id}")).await
}

/// `POST /comment/create`.
///
/// # Errors
///
/// Propagates transport, status, and decode failures.
pub async fn create_comment(api: &ApiClient, payload: &CommentPayload) -> Result<Comment, ApiError> {
    decode(api.post("/comment/create", payload).await)
}

/// `PUT /comment/likeComment/{comment_id}`; toggles the caller's like.
///
/// # Errors
///
/// Propagates transport, status, and decode failures.
pub async fn like_comment(api: &ApiClient, comment_id: &str) -> Result<Comment, ApiError> {
    decode(api.put(&format!("/comment/likeComment/{comment_id}"), &serde_json::json!({})).await)
}

/// `DELETE /comment/deleteComment/{comment_id}`.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_comment(api: &ApiClient, comment_id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/comment/deleteComment/{comment_id}")).await.map(|_| ())
}

/// Dashboard preview: the five latest comments.
pub async fn get_comments(api: &ApiClient) -> ReadOutcome<CommentList> {
    read(api, "/comment/getcomments?limit=5").await
}

/// One page of comments for the admin table.
pub async fn get_all_comments(api: &ApiClient, start_index: usize) -> ReadOutcome<CommentList> {
    read(api, &format!("/comment/getcomments?startIndex={start_index}")).await
}

// =============================================================================
// USERS
// =============================================================================

/// Dashboard preview: the five newest users.
pub async fn get_users(api: &ApiClient) -> ReadOutcome<UserList> {
    read(api, "/user/getusers?limit=5").await
}

/// One page of users for the admin table.
pub async fn get_all_users(api: &ApiClient, start_index: usize) -> ReadOutcome<UserList> {
    read(api, &format!("/user/getusers?startIndex={start_index}")).await
}

/// `DELETE /user/delete/{user_id}`.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_user(api: &ApiClient, user_id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/user/delete/{user_id}")).await.map(|_| ())
}
