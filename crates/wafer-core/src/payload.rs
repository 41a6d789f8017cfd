// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vendor echo payload consumed by the front-end SDK.
//!
//! The payload is a flat JSON object keyed by [`SESSION_MAGIC_ID`] so the SDK
//! can recognize it, followed by either a `session` ticket or an
//! `error`/`message` pair:
//!
//! ```json
//! {"F2C224D4-2BCE-4C64-AF9F-A6D872000D1A": "1", "session": {"id": "...", "skey": "..."}}
//! {"F2C224D4-2BCE-4C64-AF9F-A6D872000D1A": "1", "error": "ERR_LOGIN_FAILED", "message": "..."}
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{SESSION_MAGIC_ID, SESSION_MAGIC_VALUE};
use crate::types::ErrorCategory;

/// Session id/key pair echoed after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTicket {
    pub id: String,
    pub skey: String,
}

/// What the payload reports besides the magic marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VendorBody {
    Session {
        session: SessionTicket,
    },
    Error {
        error: ErrorCategory,
        message: String,
    },
}

/// A payload the embedding application must return verbatim to the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorPayload {
    // Must match `SESSION_MAGIC_ID`; serde needs the literal.
    #[serde(rename = "F2C224D4-2BCE-4C64-AF9F-A6D872000D1A")]
    magic: String,
    #[serde(flatten)]
    body: VendorBody,
}

impl VendorPayload {
    pub fn session(id: impl Into<String>, skey: impl Into<String>) -> Self {
        Self::with_body(VendorBody::Session {
            session: SessionTicket {
                id: id.into(),
                skey: skey.into(),
            },
        })
    }

    pub fn error(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self::with_body(VendorBody::Error {
            error: category,
            message: message.into(),
        })
    }

    fn with_body(body: VendorBody) -> Self {
        Self {
            magic: SESSION_MAGIC_VALUE.to_string(),
            body,
        }
    }

    pub fn body(&self) -> &VendorBody {
        &self.body
    }

    /// The reported error category, if this is an error payload.
    pub fn category(&self) -> Option<ErrorCategory> {
        match &self.body {
            VendorBody::Error { error, .. } => Some(*error),
            VendorBody::Session { .. } => None,
        }
    }

    /// The magic marker key and its value.
    pub fn magic(&self) -> (&'static str, &str) {
        (SESSION_MAGIC_ID, &self.magic)
    }

    /// Renders the payload as the JSON value the SDK expects.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn session_payload_shape() {
        let payload = VendorPayload::session("sid", "skey");
        assert_eq!(
            payload.to_json().unwrap(),
            json!({
                "F2C224D4-2BCE-4C64-AF9F-A6D872000D1A": "1",
                "session": {"id": "sid", "skey": "skey"}
            })
        );
        assert_eq!(payload.category(), None);
    }

    #[test]
    fn error_payload_shape() {
        let payload = VendorPayload::error(ErrorCategory::InvalidSession, "code: 60011, message: x");
        assert_eq!(
            payload.to_json().unwrap(),
            json!({
                "F2C224D4-2BCE-4C64-AF9F-A6D872000D1A": "1",
                "error": "ERR_INVALID_SESSION",
                "message": "code: 60011, message: x"
            })
        );
        assert_eq!(payload.category(), Some(ErrorCategory::InvalidSession));
    }

    #[test]
    fn magic_key_matches_constant() {
        let value = VendorPayload::session("a", "b").to_json().unwrap();
        assert_eq!(value[SESSION_MAGIC_ID], "1");
        assert_eq!(VendorPayload::session("a", "b").magic(), (SESSION_MAGIC_ID, "1"));
    }

    #[test]
    fn payload_parses_back_from_sdk_json() {
        let raw = json!({
            "F2C224D4-2BCE-4C64-AF9F-A6D872000D1A": "1",
            "error": "ERR_LOGIN_FAILED",
            "message": "boom"
        });
        let payload: VendorPayload = serde_json::from_value(raw).unwrap();
        assert_eq!(payload, VendorPayload::error(ErrorCategory::LoginFailed, "boom"));
    }
}
