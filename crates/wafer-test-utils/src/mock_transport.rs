// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock session transport for deterministic testing.
//!
//! `MockTransport` implements `SessionTransport` with pre-configured replies
//! and records every request it receives, so tests can assert on the exact
//! envelope sent and on how many remote calls were made.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use wafer_core::{BoxError, SessionTransport, TransportResponse};

use crate::fixtures;

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    /// The posted body parsed as JSON, or `Null` if it was not valid JSON.
    pub body: serde_json::Value,
}

/// Canned outcome of one transport call.
#[derive(Debug, Clone)]
enum Reply {
    Response(TransportResponse),
    Failure(String),
}

/// A transport that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty, a
/// successful reply carrying [`fixtures::sample_session_data`] is returned.
/// Clones share the same queue and call log.
#[derive(Debug, Clone)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTransport {
    /// Create a new mock transport with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock transport pre-loaded with JSON reply bodies, each
    /// answered with HTTP 200.
    pub fn with_bodies(bodies: Vec<serde_json::Value>) -> Self {
        let replies = bodies
            .into_iter()
            .map(|body| Reply::Response(json_response(200, &body)))
            .collect();
        Self {
            replies: Arc::new(Mutex::new(replies)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a JSON reply body with HTTP 200.
    pub async fn push_body(&self, body: serde_json::Value) {
        self.push_response(json_response(200, &body)).await;
    }

    /// Queue a raw reply.
    pub async fn push_response(&self, response: TransportResponse) {
        self.replies.lock().await.push_back(Reply::Response(response));
    }

    /// Queue a transport-level failure (connection refused, timeout, ...).
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .await
            .push_back(Reply::Failure(message.into()));
    }

    /// Number of requests received so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// All requests received so far, oldest first.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    async fn next_reply(&self) -> Reply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Reply::Response(json_response(
                    200,
                    &fixtures::success_body(&fixtures::sample_session_data()),
                ))
            })
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn json_response(status: u16, body: &serde_json::Value) -> TransportResponse {
    TransportResponse {
        status,
        body: body.to_string().into_bytes(),
    }
}

#[async_trait]
impl SessionTransport for MockTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<TransportResponse, BoxError> {
        let parsed = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        self.calls.lock().await.push(RecordedCall {
            url: url.to_string(),
            body: parsed,
        });

        match self.next_reply().await {
            Reply::Response(response) => Ok(response),
            Reply::Failure(message) => Err(message.into()),
        }
    }
}
