// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Wafer session adapter.
//!
//! Every error carries a stable numeric code. Locally raised errors use the
//! `PARAM_ERR`, `HEADER_ERR`, and `SERVE_ERR` codes; remote failures forward
//! the session server's own code and message verbatim.

use std::fmt;

use thiserror::Error;

use crate::constants::{RETURN_CODE_HEADER_ERR, RETURN_CODE_PARAM_ERR, RETURN_CODE_SERVE_ERR};
use crate::types::{CallerResult, Operation, RemoteCode};

/// Boxed error used for transport and codec failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The error type returned by every adapter operation.
///
/// `Display` renders `code: {code}, message: {message}`; the same text is
/// embedded in vendor payloads sent back to the front-end SDK.
#[derive(Debug, Error)]
pub enum WaferError {
    /// A construction-time setting is blank.
    MissingConfig { field: &'static str },

    /// Embedded mode was selected but no inbound request headers were supplied.
    MissingHeaderSource,

    /// The operation name is neither `login` nor `check`.
    InvalidAct { act: String },

    /// Fewer positional arguments than the operation requires.
    ParamCount {
        operation: Operation,
        expected: usize,
        given: usize,
    },

    /// A positional argument is present but empty.
    EmptyParam {
        operation: Operation,
        index: usize,
        field: &'static str,
    },

    /// A required inbound header is missing or empty.
    EmptyHeader { header: &'static str },

    /// Serializing the request, talking to the server, or decoding its reply failed.
    Serve {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The session server answered with a non-success code.
    Remote { code: RemoteCode, message: String },
}

impl WaferError {
    /// Wraps an underlying failure as a `SERVE_ERR`.
    pub fn serve(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self::Serve {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Returns the numeric code reported to callers.
    pub fn code(&self) -> i64 {
        match self {
            Self::MissingConfig { .. }
            | Self::MissingHeaderSource
            | Self::InvalidAct { .. }
            | Self::ParamCount { .. }
            | Self::EmptyParam { .. } => RETURN_CODE_PARAM_ERR,
            Self::EmptyHeader { .. } => RETURN_CODE_HEADER_ERR,
            Self::Serve { .. } => RETURN_CODE_SERVE_ERR,
            Self::Remote { code, .. } => code.as_i64(),
        }
    }

    /// Returns the human-readable message without the code prefix.
    pub fn message(&self) -> String {
        match self {
            Self::MissingConfig { field } => format!("{field} is empty"),
            Self::MissingHeaderSource => "use wafer sdk, http request required".to_string(),
            Self::InvalidAct { .. } => "invalid act, must in [login,check]".to_string(),
            Self::ParamCount {
                operation,
                expected,
                given,
            } => format!("{operation} func require {expected} params, {given} params given"),
            Self::EmptyParam {
                operation,
                index,
                field,
            } => format!("{operation} func params[{index}] {field} is empty"),
            Self::EmptyHeader { header } => {
                format!("use wafer sdk, request header {header} is empty")
            }
            Self::Serve { message, .. } | Self::Remote { message, .. } => message.clone(),
        }
    }

    /// True when the error was raised before any network I/O.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Serve { .. } | Self::Remote { .. })
    }
}

impl fmt::Display for WaferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code: {}, message: {}", self.code(), self.message())
    }
}

/// A failed `login` or `check` call.
///
/// Carries the error together with the caller result that must still be
/// honored, so an Embedded-mode vendor payload and the error always agree.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct CallFailure {
    #[source]
    pub error: WaferError,
    pub result: CallerResult,
}

impl CallFailure {
    /// A failure with nothing to echo back to the front-end.
    pub fn plain(error: WaferError) -> Self {
        Self {
            error,
            result: CallerResult::default(),
        }
    }
}

impl From<WaferError> for CallFailure {
    fn from(error: WaferError) -> Self {
        Self::plain(error)
    }
}
