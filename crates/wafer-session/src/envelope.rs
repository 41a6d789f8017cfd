// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session server request/response envelopes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use wafer_core::constants::{COMPONENT_NAME, PROTOCOL_VERSION};
use wafer_core::{Operation, RemoteCode, SessionData, WaferError};

// --- Request types ---

/// Outbound request: `{version, componentName, interface: {appid, interfaceName, para}}`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    pub version: u32,
    pub component_name: &'static str,
    pub interface: RequestInterface,
}

/// The `interface` block of a request envelope.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RequestInterface {
    pub appid: String,
    #[serde(rename = "interfaceName")]
    pub interface_name: &'static str,
    /// Credential parameters, keyed by their wire names.
    #[serde(rename = "para")]
    pub params: BTreeMap<String, String>,
}

impl fmt::Debug for RequestEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestEnvelope")
            .field("version", &self.version)
            .field("component_name", &self.component_name)
            .field("appid", &self.interface.appid)
            .field("interface_name", &self.interface.interface_name)
            .field("params", &self.interface.params.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builds the envelope for `operation`, copying `params` verbatim.
pub fn build(
    operation: Operation,
    caller_id: &str,
    params: BTreeMap<String, String>,
) -> RequestEnvelope {
    RequestEnvelope {
        version: PROTOCOL_VERSION,
        component_name: COMPONENT_NAME,
        interface: RequestInterface {
            appid: caller_id.to_string(),
            interface_name: operation.interface_name(),
            params,
        },
    }
}

// --- Response types ---

/// Inbound reply: `{returnCode, returnMessage, returnData}`.
///
/// `returnData` is kept undecoded so that it is only interpreted when
/// `returnCode` signals success.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "returnCode")]
    pub code: RemoteCode,
    #[serde(rename = "returnMessage", default)]
    pub message: String,
    #[serde(rename = "returnData", default)]
    pub data: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    /// Returns the session data on success, or the remote code and message verbatim.
    pub fn into_result(self) -> Result<SessionData, WaferError> {
        if !self.code.is_success() {
            return Err(WaferError::Remote {
                code: self.code,
                message: self.message,
            });
        }
        match self.data {
            None | Some(serde_json::Value::Null) => Ok(SessionData::default()),
            Some(data) => serde_json::from_value(data).map_err(|e| WaferError::Serve {
                message: format!("failed to decode returnData: {e}"),
                source: Some(Box::new(e)),
            }),
        }
    }
}
