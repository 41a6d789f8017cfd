// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Login and session-check adapter for the Wafer session-authentication server.
//!
//! A call flows through four stages:
//! [`resolver`] pulls credentials from request headers or positional
//! arguments, [`envelope`] packs them, [`client`] performs the single POST and
//! classifies the reply, and [`shaper`] builds the caller result, including
//! the vendor echo payload in Embedded mode.
//!
//! ```no_run
//! use wafer_session::{CallInput, SessionAuthenticator, SessionSettings, WaferSession};
//! use wafer_core::InputMode;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let session = WaferSession::new(SessionSettings {
//!     appid: "wx0123456789abcdef".into(),
//!     auth_server_url: "http://127.0.0.1:8080/mina_auth/".into(),
//!     mode: InputMode::Standalone,
//! })?;
//! let args = vec!["session-id".to_string(), "session-key".to_string()];
//! let result = session.check(CallInput::from_args(&args)).await?;
//! println!("{}", result.data.user_info.nick_name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod envelope;
pub mod resolver;
pub mod shaper;
pub mod transport;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use wafer_config::{SessionConfig, WaferConfig};
use wafer_core::{CredentialSet, InputMode, Operation, SessionTransport, WaferError};

pub use wafer_core::{CallFailure, CallInput, CallerResult, SessionAuthenticator, VendorPayload};

use crate::client::SessionClient;
pub use crate::transport::HttpTransport;

/// Construction-time settings. Never mutated by a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Caller identity sent with every remote call.
    pub appid: String,
    /// Session server endpoint.
    pub auth_server_url: String,
    /// Where credentials are read from.
    pub mode: InputMode,
}

impl From<&SessionConfig> for SessionSettings {
    fn from(config: &SessionConfig) -> Self {
        Self {
            appid: config.appid.clone(),
            auth_server_url: config.auth_server_url.clone(),
            mode: config.mode,
        }
    }
}

/// The session adapter.
///
/// Holds only its settings and transport; every intermediate value of a call
/// (credentials, envelope, reply) lives on that call's stack, so one instance
/// can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct WaferSession<T = HttpTransport> {
    settings: SessionSettings,
    client: SessionClient<T>,
}

impl WaferSession<HttpTransport> {
    /// Creates an adapter using the HTTP transport with the default timeout.
    pub fn new(settings: SessionSettings) -> Result<Self, WaferError> {
        let transport = HttpTransport::new(transport::DEFAULT_TIMEOUT)?;
        Ok(Self::with_transport(settings, transport))
    }

    /// Creates an adapter from loaded configuration.
    pub fn from_config(config: &WaferConfig) -> Result<Self, WaferError> {
        let transport =
            HttpTransport::new(Duration::from_secs(config.session.timeout_secs))?;
        Ok(Self::with_transport(
            SessionSettings::from(&config.session),
            transport,
        ))
    }
}

impl<T: SessionTransport> WaferSession<T> {
    /// Creates an adapter over any transport.
    pub fn with_transport(settings: SessionSettings, transport: T) -> Self {
        info!(
            appid = %settings.appid,
            mode = %settings.mode,
            "session adapter initialized"
        );
        let client = SessionClient::new(transport, settings.auth_server_url.clone());
        Self { settings, client }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn transport(&self) -> &T {
        self.client.transport()
    }

    /// Runs the operation named `act` (`"login"` or `"check"`).
    ///
    /// Unknown names fail with `PARAM_ERR` once the configuration and
    /// header-source preconditions have passed.
    pub async fn call(&self, act: &str, input: CallInput<'_>) -> Result<CallerResult, CallFailure> {
        let credentials = resolver::resolve(&self.settings, act, input)?;
        self.execute(credentials).await
    }

    async fn run(
        &self,
        operation: Operation,
        input: CallInput<'_>,
    ) -> Result<CallerResult, CallFailure> {
        let credentials = resolver::resolve_operation(&self.settings, operation, input)?;
        self.execute(credentials).await
    }

    async fn execute(&self, credentials: CredentialSet) -> Result<CallerResult, CallFailure> {
        let operation = credentials.operation();
        let envelope = envelope::build(operation, &self.settings.appid, credentials.into_params());
        debug!(
            %operation,
            interface = envelope.interface.interface_name,
            "calling session server"
        );
        let outcome = self.client.call(&envelope).await;
        shaper::shape(operation, self.settings.mode, outcome)
    }
}

#[async_trait]
impl<T: SessionTransport> SessionAuthenticator for WaferSession<T> {
    async fn login(&self, input: CallInput<'_>) -> Result<CallerResult, CallFailure> {
        self.run(Operation::Login, input).await
    }

    async fn check(&self, input: CallInput<'_>) -> Result<CallerResult, CallFailure> {
        self.run(Operation::Check, input).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracing_test::traced_test;
    use wafer_core::ErrorCategory;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn session(url: String, mode: InputMode) -> WaferSession {
        WaferSession::new(SessionSettings {
            appid: "wx-app".into(),
            auth_server_url: url,
            mode,
        })
        .unwrap()
    }

    async fn server_replying(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn embedded_login_round_trip() {
        let server = server_replying(json!({
            "returnCode": 0,
            "returnMessage": "OK",
            "returnData": {"id": "sid", "skey": "skey", "user_info": {"openId": "o"}, "duration": 60}
        }))
        .await;

        let headers: &[(&str, &str)] = &[
            ("X-WX-Code", "c"),
            ("X-WX-Encrypted-Data", "d"),
            ("X-WX-IV", "v"),
        ];
        let result = session(server.uri(), InputMode::Embedded)
            .login(CallInput::from_headers(&headers))
            .await
            .unwrap();

        assert!(result.echo_required);
        assert_eq!(result.data.user_info.open_id, "o");
        assert_eq!(
            result.vendor_payload.unwrap().to_json().unwrap(),
            json!({
                "F2C224D4-2BCE-4C64-AF9F-A6D872000D1A": "1",
                "session": {"id": "sid", "skey": "skey"}
            })
        );
    }

    #[tokio::test]
    async fn call_dispatches_by_act() {
        let server = server_replying(json!({
            "returnCode": 60011,
            "returnMessage": "expired"
        }))
        .await;

        let headers: &[(&str, &str)] = &[("X-WX-Id", "sid"), ("X-WX-Skey", "k")];
        let failure = session(server.uri(), InputMode::Embedded)
            .call("check", CallInput::from_headers(&headers))
            .await
            .unwrap_err();
        assert_eq!(
            failure.result.vendor_payload.and_then(|p| p.category()),
            Some(ErrorCategory::InvalidSession)
        );
    }

    #[tokio::test]
    async fn call_rejects_unknown_act() {
        let failure = session("http://127.0.0.1:1/".into(), InputMode::Standalone)
            .call("logout", CallInput::default())
            .await
            .unwrap_err();
        assert!(matches!(failure.error, WaferError::InvalidAct { .. }));
        assert!(failure.result.vendor_payload.is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn credentials_never_reach_logs() {
        let server = server_replying(json!({
            "returnCode": 0,
            "returnData": {"id": "sid", "skey": "server-skey"}
        }))
        .await;

        let args = vec![
            "login-code-secret".to_string(),
            "encrypted-secret".to_string(),
            "iv-secret".to_string(),
        ];
        session(server.uri(), InputMode::Standalone)
            .login(CallInput::from_args(&args))
            .await
            .unwrap();

        assert!(logs_contain("calling session server"));
        assert!(!logs_contain("login-code-secret"));
        assert!(!logs_contain("encrypted-secret"));
        assert!(!logs_contain("iv-secret"));
        assert!(!logs_contain("server-skey"));
    }

    #[test]
    fn settings_from_config() {
        let mut config = WaferConfig::default();
        config.session.appid = "wx".into();
        config.session.auth_server_url = "http://localhost/".into();
        config.session.mode = InputMode::Embedded;

        let session = WaferSession::from_config(&config).unwrap();
        assert_eq!(
            session.settings(),
            &SessionSettings {
                appid: "wx".into(),
                auth_server_url: "http://localhost/".into(),
                mode: InputMode::Embedded,
            }
        );
    }
}
