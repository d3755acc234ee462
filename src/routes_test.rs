use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;

async fn get_app(uri: &str) -> axum::response::Response {
    let config = HostConfig::from_lookup(|_: &str| None).unwrap();
    app(&config).unwrap().oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap()
}

// =============================================================
// Health check
// =============================================================

#[tokio::test]
async fn healthz_answers_ok() {
    let resp = health_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_router_does_not_serve_other_paths() {
    let resp = health_routes()
        .oneshot(Request::builder().uri("/home").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// =============================================================
// Server-rendered client routes
// =============================================================

#[tokio::test]
async fn root_redirects_home() {
    let resp = get_app("/").await;
    let location = resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok());
    assert_eq!(location, Some("/home"));
}

#[tokio::test]
async fn home_renders_without_redirect() {
    let resp = get_app("/home").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn admin_deep_link_is_left_for_the_browser_to_guard() {
    let resp = get_app("/admin/posts").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn admin_create_deep_link_is_not_redirected() {
    let resp = get_app("/admin/create/new").await;
    assert!(resp.headers().get(header::LOCATION).is_none());
}
