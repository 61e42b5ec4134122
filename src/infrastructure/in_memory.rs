use crate::domain::ports::Transport;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Empty,
    Failure(String),
}

/// A request captured by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

impl RecordedRequest {
    /// The body parsed as JSON, or `Value::Null` if it is not JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    pub fn action(&self) -> Option<String> {
        self.json()
            .get("action")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// An in-memory transport that replays queued replies in order.
///
/// Clones share the same queue and request log, so a test can hand one clone
/// to the gateway and inspect the other. Running out of replies is reported
/// as a transport failure.
#[derive(Default, Clone)]
pub struct ScriptedTransport {
    replies: Arc<RwLock<VecDeque<Reply>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_body(&self, body: impl Into<String>) {
        self.replies.write().await.push_back(Reply::Body(body.into()));
    }

    pub async fn push_json(&self, body: Value) {
        self.push_body(body.to_string()).await;
    }

    /// Queues a reply with no body at all.
    pub async fn push_empty(&self) {
        self.replies.write().await.push_back(Reply::Empty);
    }

    pub async fn push_failure(&self, reason: impl Into<String>) {
        self.replies
            .write()
            .await
            .push_back(Reply::Failure(reason.into()));
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, url: &str, body: String) -> Result<Option<String>> {
        self.requests.write().await.push(RecordedRequest {
            url: url.to_string(),
            body,
        });

        match self.replies.write().await.pop_front() {
            Some(Reply::Body(body)) => Ok(Some(body)),
            Some(Reply::Empty) => Ok(None),
            Some(Reply::Failure(reason)) => Err(GatewayError::Transport(reason)),
            None => Err(GatewayError::Transport("no scripted reply left".to_string())),
        }
    }
}
