//! Scripted transport for exercising the client without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::LocalBoxFuture;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest, ApiResponse, Transport};
use crate::util::storage::MemoryStorage;

pub const TEST_BASE_URL: &str = "http://api.test/api";

/// Replies with queued results in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn replying(replies: impl IntoIterator<Item = Result<ApiResponse, ApiError>>) -> Arc<Self> {
        Arc::new(Self { replies: Mutex::new(replies.into_iter().collect()), seen: Mutex::default() })
    }

    pub fn ok_json(body: serde_json::Value) -> Arc<Self> {
        Self::replying([Ok(ApiResponse::new(200, body.to_string()))])
    }

    pub fn failing(error: ApiError) -> Arc<Self> {
        Self::replying([Err(error)])
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<ApiResponse, ApiError>> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())));
        Box::pin(async move { reply })
    }
}

/// Client over `transport` with the given persisted storage.
pub fn client_with(storage: Arc<MemoryStorage>, transport: Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::new(TEST_BASE_URL, storage, transport)
}
