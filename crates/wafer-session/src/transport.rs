// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! reqwest-backed [`SessionTransport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;
use wafer_core::constants::CONTENT_TYPE_JSON;
use wafer_core::{BoxError, SessionTransport, TransportResponse, WaferError};

/// Default deadline for a single request to the session server.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport with a pooled client.
///
/// The client's timeout is the only deadline applied to a call; hitting it
/// surfaces as a transport error.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, WaferError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| WaferError::Serve {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SessionTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<TransportResponse, BoxError> {
        let response = self.client.post(url).body(body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "session server responded");
        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn posts_body_with_json_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mina_auth/"))
            .and(header("content-type", "application/json;charset=utf-8"))
            .and(body_string("{\"k\":1}"))
            .respond_with(ResponseTemplate::new(200).set_body_string("reply"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(DEFAULT_TIMEOUT).unwrap();
        let response = transport
            .post_json(
                &format!("{}/mina_auth/", server.uri()),
                b"{\"k\":1}".to_vec(),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"reply");
    }

    #[tokio::test]
    async fn non_success_status_is_not_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(DEFAULT_TIMEOUT).unwrap();
        let response = transport.post_json(&server.uri(), Vec::new()).await.unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(response.body, b"oops");
    }

    #[tokio::test]
    async fn deadline_expiry_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(Duration::from_millis(100)).unwrap();
        let result = transport.post_json(&server.uri(), Vec::new()).await;
        assert!(result.is_err());
    }
}
