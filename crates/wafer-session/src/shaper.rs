// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns the outcome of a remote call into the caller-facing result.
//!
//! | operation | outcome | Embedded                      | Standalone |
//! |-----------|---------|-------------------------------|------------|
//! | login     | ok      | echo `session` payload        | data only  |
//! | login     | err     | echo `ERR_LOGIN_FAILED`       | error only |
//! | check     | ok      | data only, never echoed       | data only  |
//! | check     | err     | echo invalid-session / failed | error only |

use wafer_core::{
    CallFailure, CallerResult, ErrorCategory, InputMode, Operation, RemoteCode, SessionData,
    VendorPayload, WaferError,
};

/// Shapes the outcome of the remote call for `operation`.
pub fn shape(
    operation: Operation,
    mode: InputMode,
    outcome: Result<SessionData, WaferError>,
) -> Result<CallerResult, CallFailure> {
    let embedded = mode == InputMode::Embedded;

    match outcome {
        Ok(data) => {
            let echo_required = embedded && operation == Operation::Login;
            let vendor_payload =
                echo_required.then(|| VendorPayload::session(&data.id, &data.skey));
            Ok(CallerResult {
                echo_required,
                vendor_payload,
                data,
            })
        }
        Err(error) if embedded => {
            let category = ErrorCategory::for_operation(operation, RemoteCode::from(error.code()));
            let payload = VendorPayload::error(category, error.to_string());
            Err(CallFailure {
                error,
                result: CallerResult {
                    echo_required: true,
                    vendor_payload: Some(payload),
                    data: SessionData::default(),
                },
            })
        }
        Err(error) => Err(CallFailure::plain(error)),
    }
}

#[cfg(test)]
mod tests {
    use wafer_core::VendorBody;

    use super::*;

    fn data() -> SessionData {
        SessionData {
            id: "sid".into(),
            skey: "skey".into(),
            duration: 7200,
            ..SessionData::default()
        }
    }

    fn remote(code: i64) -> WaferError {
        WaferError::Remote {
            code: RemoteCode::from(code),
            message: "remote says no".into(),
        }
    }

    #[test]
    fn embedded_login_success_echoes_session() {
        let result = shape(Operation::Login, InputMode::Embedded, Ok(data())).unwrap();
        assert!(result.echo_required);
        assert_eq!(result.data, data());
        assert_eq!(
            result.vendor_payload,
            Some(VendorPayload::session("sid", "skey"))
        );
    }

    #[test]
    fn standalone_login_success_has_no_payload() {
        let result = shape(Operation::Login, InputMode::Standalone, Ok(data())).unwrap();
        assert!(!result.echo_required);
        assert!(result.vendor_payload.is_none());
        assert_eq!(result.data, data());
    }

    #[test]
    fn check_success_is_never_echoed() {
        for mode in [InputMode::Embedded, InputMode::Standalone] {
            let result = shape(Operation::Check, mode, Ok(data())).unwrap();
            assert!(!result.echo_required);
            assert!(result.vendor_payload.is_none());
            assert_eq!(result.data, data());
        }
    }

    #[test]
    fn embedded_login_failure_is_login_failed_for_any_code() {
        for code in [60011, 60012, 2000, 1] {
            let failure = shape(Operation::Login, InputMode::Embedded, Err(remote(code))).unwrap_err();
            assert!(failure.result.echo_required);
            assert_eq!(failure.result.data, SessionData::default());
            let payload = failure.result.vendor_payload.expect("payload");
            match payload.body() {
                VendorBody::Error { error, message } => {
                    assert_eq!(*error, ErrorCategory::LoginFailed);
                    assert_eq!(*message, failure.error.to_string());
                }
                other => panic!("unexpected body {other:?}"),
            }
        }
    }

    #[test]
    fn embedded_check_failure_categories() {
        let cases = [
            (60011, ErrorCategory::InvalidSession),
            (60012, ErrorCategory::InvalidSession),
            (2000, ErrorCategory::CheckLoginFailed),
            (-1, ErrorCategory::CheckLoginFailed),
        ];
        for (code, expected) in cases {
            let failure = shape(Operation::Check, InputMode::Embedded, Err(remote(code))).unwrap_err();
            assert!(failure.result.echo_required);
            assert_eq!(
                failure.result.vendor_payload.and_then(|p| p.category()),
                Some(expected),
                "code {code}"
            );
            assert_eq!(failure.error.code(), code);
        }
    }

    #[test]
    fn standalone_failures_have_no_payload() {
        for operation in [Operation::Login, Operation::Check] {
            let failure = shape(operation, InputMode::Standalone, Err(remote(60011))).unwrap_err();
            assert!(!failure.result.echo_required);
            assert!(failure.result.vendor_payload.is_none());
            assert_eq!(failure.error.code(), 60011);
        }
    }
}
