// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client for the session-authentication server.
//!
//! Provides [`SessionClient`], which serializes a request envelope, performs
//! exactly one POST through its [`SessionTransport`], and classifies the reply.
//! Codec and transport failures become `SERVE_ERR`; a non-zero `returnCode`
//! is forwarded verbatim.

use tracing::{debug, warn};
use wafer_core::{SessionData, SessionTransport, WaferError};

use crate::envelope::{RequestEnvelope, ResponseEnvelope};

/// Sends envelopes to one session server endpoint.
#[derive(Debug, Clone)]
pub struct SessionClient<T> {
    transport: T,
    url: String,
}

impl<T: SessionTransport> SessionClient<T> {
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Performs one remote call and returns the session data on success.
    pub async fn call(&self, envelope: &RequestEnvelope) -> Result<SessionData, WaferError> {
        let interface = envelope.interface.interface_name;
        let body = serde_json::to_vec(envelope).map_err(WaferError::serve)?;

        let response = self
            .transport
            .post_json(&self.url, body)
            .await
            .map_err(|e| {
                warn!(interface, error = %e, "session server request failed");
                WaferError::serve(e)
            })?;

        debug!(interface, status = response.status, "session server reply received");

        let reply: ResponseEnvelope = serde_json::from_slice(&response.body).map_err(|e| {
            warn!(interface, status = response.status, error = %e, "unparseable session server reply");
            WaferError::Serve {
                message: format!(
                    "failed to parse session server response (HTTP {}): {e}",
                    response.status
                ),
                source: Some(Box::new(e)),
            }
        })?;

        reply.into_result().inspect_err(|e| {
            if let WaferError::Remote { code, message } = e {
                debug!(interface, %code, message = %message, "session server rejected request");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;
    use wafer_core::{Operation, RemoteCode};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::envelope;
    use crate::transport::{DEFAULT_TIMEOUT, HttpTransport};

    fn test_client(url: String) -> SessionClient<HttpTransport> {
        SessionClient::new(HttpTransport::new(DEFAULT_TIMEOUT).unwrap(), url)
    }

    fn check_envelope() -> RequestEnvelope {
        envelope::build(
            Operation::Check,
            "wx-app",
            BTreeMap::from([
                ("id".to_string(), "sid".to_string()),
                ("skey".to_string(), "k".to_string()),
            ]),
        )
    }

    #[tokio::test]
    async fn call_success_returns_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/mina_auth/"))
            .and(body_json(json!({
                "version": 1,
                "componentName": "MA",
                "interface": {
                    "appid": "wx-app",
                    "interfaceName": "qcloud.cam.auth",
                    "para": {"id": "sid", "skey": "k"}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "returnCode": 0,
                "returnMessage": "OK",
                "returnData": {
                    "id": "sid",
                    "skey": "k",
                    "user_info": {"openId": "open-1", "nickName": "Nick"},
                    "duration": 3600
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(format!("{}/mina_auth/", server.uri()));
        let data = client.call(&check_envelope()).await.unwrap();
        assert_eq!(data.id, "sid");
        assert_eq!(data.user_info.nick_name, "Nick");
        assert_eq!(data.duration, 3600);
    }

    #[tokio::test]
    async fn remote_code_is_forwarded_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "returnCode": 60012,
                "returnMessage": "wx session verification failed",
                "returnData": {}
            })))
            .mount(&server)
            .await;

        let err = test_client(server.uri())
            .call(&check_envelope())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WaferError::Remote {
                code: RemoteCode::WxSessionFailed,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "code: 60012, message: wx session verification failed"
        );
    }

    #[tokio::test]
    async fn error_status_with_envelope_body_is_still_classified() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "returnCode": 1001,
                "returnMessage": "bad para"
            })))
            .mount(&server)
            .await;

        let err = test_client(server.uri())
            .call(&check_envelope())
            .await
            .unwrap_err();
        assert_eq!(err.code(), 1001);
    }

    #[tokio::test]
    async fn unparseable_body_is_serve_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = test_client(server.uri())
            .call(&check_envelope())
            .await
            .unwrap_err();
        assert_eq!(err.code(), 2000);
        assert!(err.message().contains("HTTP 502"), "got: {err}");
    }

    #[tokio::test]
    async fn connection_failure_is_serve_error() {
        let server = MockServer::start().await;
        let url = server.uri();
        drop(server);

        let err = test_client(url).call(&check_envelope()).await.unwrap_err();
        assert_eq!(err.code(), 2000);
        assert!(!err.is_local());
    }
}
