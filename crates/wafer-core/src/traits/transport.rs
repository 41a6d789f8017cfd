// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound transport trait: POST a JSON body, receive the raw reply.

use async_trait::async_trait;

use crate::error::BoxError;

/// Raw reply from the session server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code. Informational only; the body envelope decides success.
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends an already-serialized JSON request to the session server.
///
/// Any failure to deliver the request or read the reply, including the
/// transport's own deadline expiring, is returned as an error. Implementations
/// must not retry.
#[async_trait]
pub trait SessionTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<TransportResponse, BoxError>;
}
