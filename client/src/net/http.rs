//! The single configured HTTP client every resource function goes through.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` owns the build-time base URL, the `access_token` request
//! interceptor, and a `Transport`. The browser build sends with `gloo-net`;
//! native builds (SSR, tests) get `OfflineTransport`, which refuses every
//! request, or a scripted transport injected by the caller.
//!
//! ERROR HANDLING
//! ==============
//! Interceptor and transport failures are returned unchanged. A non-2xx
//! response becomes `ApiError::Status`. There is no retry, timeout, or
//! de-duplication of concurrent identical requests.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;
use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::util::storage::{SharedStorage, read_token};

/// Header carrying the persisted API token.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// An outgoing request, fully resolved against the base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be represented as JSON.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(self)
    }

    /// Set `name`, replacing any previous value.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(existing, _)| existing != name);
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(existing, _)| existing == name).map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the body carries no document (`""` or `null`).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let body = self.body.trim();
        body.is_empty() || body == "null"
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends a prepared request and yields the raw response.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>>;
}

/// Browser transport over `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>> {
        use gloo_net::http::Request;

        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;
            let resp = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(ApiResponse { status, body })
        })
    }
}

/// Transport for builds without a browser; every request fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn send(&self, _request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>> {
        Box::pin(async { Err(ApiError::Unavailable) })
    }
}

/// Attaches the persisted token as the `access_token` header.
#[derive(Clone)]
pub struct AccessTokenInterceptor {
    storage: SharedStorage,
}

impl AccessTokenInterceptor {
    #[must_use]
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Stamp `request` with the token read at send time (empty if unset).
    ///
    /// # Errors
    ///
    /// Never fails today; the signature keeps interceptor failures on the
    /// same propagation path as transport failures.
    pub fn intercept(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
        let token = read_token(self.storage.as_ref());
        Ok(request.with_header(ACCESS_TOKEN_HEADER, token))
    }
}

/// Shared API client. Cheap to clone; provided through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    interceptor: AccessTokenInterceptor,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str, storage: SharedStorage, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            interceptor: AccessTokenInterceptor::new(storage),
            transport,
        }
    }

    /// Client for this build's API endpoint and HTTP stack.
    #[must_use]
    pub fn for_build(storage: SharedStorage) -> Self {
        #[cfg(feature = "hydrate")]
        let transport: Arc<dyn Transport> = Arc::new(GlooTransport);
        #[cfg(not(feature = "hydrate"))]
        let transport: Arc<dyn Transport> = Arc::new(OfflineTransport);
        Self::new(crate::config::api_base_url(), storage, transport)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` (leading `/`, optional query) against the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.url(path))
    }

    /// Intercept, send, and reject non-2xx responses.
    ///
    /// # Errors
    ///
    /// Returns the interceptor's or transport's error unchanged, or
    /// `ApiError::Status` for a non-2xx response.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = self.interceptor.intercept(request)?;
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(ApiError::Status { status: resp.status, body: resp.body });
        }
        Ok(resp)
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::Get, path)).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also fails if `body` cannot be encoded.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::Post, path).with_json(body)?).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::Put, path).with_json(body)?).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::Delete, path)).await
    }
}
