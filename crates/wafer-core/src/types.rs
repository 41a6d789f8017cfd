// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model shared by the resolver, client, and result shaper.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::constants::{
    INTERFACE_CHECK, INTERFACE_LOGIN, RETURN_CODE_HEADER_ERR, RETURN_CODE_PARAM_ERR,
    RETURN_CODE_SERVE_ERR, RETURN_CODE_SKEY_EXPIRED, RETURN_CODE_SUCCESS,
    RETURN_CODE_WX_SESSION_FAILED,
};
use crate::payload::VendorPayload;
use crate::traits::HeaderSource;

/// The two operations the session server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Login,
    Check,
}

impl Operation {
    /// Remote interface identifier bound to this operation.
    pub fn interface_name(self) -> &'static str {
        match self {
            Self::Login => INTERFACE_LOGIN,
            Self::Check => INTERFACE_CHECK,
        }
    }
}

/// Where credentials are read from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Credentials come from explicit positional arguments.
    #[default]
    Standalone,
    /// Credentials come from inbound request headers set by the front-end SDK.
    Embedded,
}

/// Per-call input: the inbound request headers and/or positional arguments.
///
/// Which half is consulted depends on the adapter's [`InputMode`].
#[derive(Clone, Copy, Default)]
pub struct CallInput<'a> {
    pub headers: Option<&'a (dyn HeaderSource + Sync)>,
    pub args: &'a [String],
}

impl<'a> CallInput<'a> {
    /// Input backed by an inbound request's headers.
    pub fn from_headers(headers: &'a (dyn HeaderSource + Sync)) -> Self {
        Self {
            headers: Some(headers),
            args: &[],
        }
    }

    /// Input backed by explicit positional arguments.
    pub fn from_args(args: &'a [String]) -> Self {
        Self {
            headers: None,
            args,
        }
    }
}

impl fmt::Debug for CallInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallInput")
            .field("headers", &self.headers.is_some())
            .field("args", &self.args.len())
            .finish()
    }
}

/// Fully validated credentials for one operation.
///
/// Only constructed once every required field is non-empty.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSet {
    Login {
        code: String,
        encrypted_data: String,
        iv: String,
    },
    Check {
        id: String,
        skey: String,
    },
}

impl CredentialSet {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Login { .. } => Operation::Login,
            Self::Check { .. } => Operation::Check,
        }
    }

    /// Converts the credentials into the `para` map sent to the server.
    pub fn into_params(self) -> BTreeMap<String, String> {
        match self {
            Self::Login {
                code,
                encrypted_data,
                iv,
            } => BTreeMap::from([
                ("code".to_string(), code),
                ("encrypt_data".to_string(), encrypted_data),
                ("iv".to_string(), iv),
            ]),
            Self::Check { id, skey } => BTreeMap::from([
                ("id".to_string(), id),
                ("skey".to_string(), skey),
            ]),
        }
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { .. } => f
                .debug_struct("Login")
                .field("code", &"[redacted]")
                .field("encrypted_data", &"[redacted]")
                .field("iv", &"[redacted]")
                .finish(),
            Self::Check { id, .. } => f
                .debug_struct("Check")
                .field("id", id)
                .field("skey", &"[redacted]")
                .finish(),
        }
    }
}

/// Decrypted user profile returned by a successful login or check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub open_id: String,
    pub union_id: String,
    pub nick_name: String,
    pub gender: i64,
    pub language: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub avatar_url: String,
}

/// Session returned by the server; passed through to callers untouched.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionData {
    pub id: String,
    pub skey: String,
    pub user_info: UserInfo,
    /// Session lifetime in seconds.
    pub duration: i64,
}

impl fmt::Debug for SessionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionData")
            .field("id", &self.id)
            .field("skey", &"[redacted]")
            .field("user_info", &self.user_info)
            .field("duration", &self.duration)
            .finish()
    }
}

/// Remote return codes with known meaning, plus a fallback for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum RemoteCode {
    Success,
    ParamErr,
    HeaderErr,
    ServeErr,
    SkeyExpired,
    WxSessionFailed,
    Other(i64),
}

impl RemoteCode {
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Success => RETURN_CODE_SUCCESS,
            Self::ParamErr => RETURN_CODE_PARAM_ERR,
            Self::HeaderErr => RETURN_CODE_HEADER_ERR,
            Self::ServeErr => RETURN_CODE_SERVE_ERR,
            Self::SkeyExpired => RETURN_CODE_SKEY_EXPIRED,
            Self::WxSessionFailed => RETURN_CODE_WX_SESSION_FAILED,
            Self::Other(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<i64> for RemoteCode {
    fn from(code: i64) -> Self {
        match code {
            RETURN_CODE_SUCCESS => Self::Success,
            RETURN_CODE_PARAM_ERR => Self::ParamErr,
            RETURN_CODE_HEADER_ERR => Self::HeaderErr,
            RETURN_CODE_SERVE_ERR => Self::ServeErr,
            RETURN_CODE_SKEY_EXPIRED => Self::SkeyExpired,
            RETURN_CODE_WX_SESSION_FAILED => Self::WxSessionFailed,
            other => Self::Other(other),
        }
    }
}

impl From<RemoteCode> for i64 {
    fn from(code: RemoteCode) -> Self {
        code.as_i64()
    }
}

impl fmt::Display for RemoteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// Caller-facing failure category reported in vendor payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ErrorCategory {
    #[strum(serialize = "ERR_LOGIN_FAILED")]
    #[serde(rename = "ERR_LOGIN_FAILED")]
    LoginFailed,
    #[strum(serialize = "ERR_INVALID_SESSION")]
    #[serde(rename = "ERR_INVALID_SESSION")]
    InvalidSession,
    #[strum(serialize = "ERR_CHECK_LOGIN_FAILED")]
    #[serde(rename = "ERR_CHECK_LOGIN_FAILED")]
    CheckLoginFailed,
}

impl ErrorCategory {
    /// Category for a failed `check`: expired or unverifiable sessions are
    /// invalid, anything else is a generic check failure.
    pub fn for_check(code: RemoteCode) -> Self {
        match code {
            RemoteCode::SkeyExpired | RemoteCode::WxSessionFailed => Self::InvalidSession,
            RemoteCode::Success
            | RemoteCode::ParamErr
            | RemoteCode::HeaderErr
            | RemoteCode::ServeErr
            | RemoteCode::Other(_) => Self::CheckLoginFailed,
        }
    }

    /// Category for a failed call of the given operation.
    pub fn for_operation(operation: Operation, code: RemoteCode) -> Self {
        match operation {
            Operation::Login => Self::LoginFailed,
            Operation::Check => Self::for_check(code),
        }
    }
}

/// The caller-facing result of a `login` or `check` call.
///
/// When `echo_required` is set, `vendor_payload` must be serialized and
/// returned verbatim to the front-end SDK.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CallerResult {
    pub echo_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_payload: Option<VendorPayload>,
    pub data: SessionData,
}
