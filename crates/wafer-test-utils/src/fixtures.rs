// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned session server replies and caller inputs.

use std::collections::HashMap;

use serde_json::json;
use wafer_core::constants::{
    HEADER_CODE, HEADER_ENCRYPTED_DATA, HEADER_ID, HEADER_IV, HEADER_SKEY,
};
use wafer_core::{SessionData, UserInfo};

/// Appid used by test adapters.
pub const TEST_APPID: &str = "wx-test-app";

/// Endpoint used by test adapters backed by [`crate::MockTransport`].
pub const TEST_URL: &str = "http://session.test/mina_auth/";

/// A fully populated session, as the server would return it.
pub fn sample_session_data() -> SessionData {
    SessionData {
        id: "session-id-1".into(),
        skey: "session-skey-1".into(),
        user_info: UserInfo {
            open_id: "open-id-1".into(),
            union_id: "union-id-1".into(),
            nick_name: "Tester".into(),
            gender: 1,
            language: "en".into(),
            city: "Shenzhen".into(),
            province: "Guangdong".into(),
            country: "CN".into(),
            avatar_url: "https://example.invalid/avatar.png".into(),
        },
        duration: 7200,
    }
}

/// Successful reply carrying `data`.
pub fn success_body(data: &SessionData) -> serde_json::Value {
    json!({
        "returnCode": 0,
        "returnMessage": "OK",
        "returnData": data,
    })
}

/// Failed reply with the given code and message.
pub fn error_body(code: i64, message: &str) -> serde_json::Value {
    json!({
        "returnCode": code,
        "returnMessage": message,
        "returnData": {},
    })
}

/// Embedded-mode login headers.
pub fn login_headers(code: &str, encrypted_data: &str, iv: &str) -> HashMap<String, String> {
    HashMap::from([
        (HEADER_CODE.to_string(), code.to_string()),
        (HEADER_ENCRYPTED_DATA.to_string(), encrypted_data.to_string()),
        (HEADER_IV.to_string(), iv.to_string()),
    ])
}

/// Embedded-mode check headers.
pub fn check_headers(id: &str, skey: &str) -> HashMap<String, String> {
    HashMap::from([
        (HEADER_ID.to_string(), id.to_string()),
        (HEADER_SKEY.to_string(), skey.to_string()),
    ])
}

/// Positional arguments, owned.
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
