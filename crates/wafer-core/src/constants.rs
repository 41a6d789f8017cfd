// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed identifiers shared by the front-end SDK, the adapter, and the
//! remote session-authentication service.

/// Header carrying the login code issued to the mini-program client.
pub const HEADER_CODE: &str = "X-WX-Code";

/// Header carrying the encrypted user profile.
pub const HEADER_ENCRYPTED_DATA: &str = "X-WX-Encrypted-Data";

/// Header carrying the initialization vector for the encrypted profile.
pub const HEADER_IV: &str = "X-WX-IV";

/// Header carrying the session id issued by a previous login.
pub const HEADER_ID: &str = "X-WX-Id";

/// Header carrying the session key issued by a previous login.
pub const HEADER_SKEY: &str = "X-WX-Skey";

/// Key the front-end SDK looks for to recognize a session payload.
pub const SESSION_MAGIC_ID: &str = "F2C224D4-2BCE-4C64-AF9F-A6D872000D1A";

/// Value paired with [`SESSION_MAGIC_ID`] in every vendor payload.
pub const SESSION_MAGIC_VALUE: &str = "1";

/// Remote interface performing the login exchange.
pub const INTERFACE_LOGIN: &str = "qcloud.cam.id_skey";

/// Remote interface validating an existing session.
pub const INTERFACE_CHECK: &str = "qcloud.cam.auth";

/// Protocol version sent in every request envelope.
pub const PROTOCOL_VERSION: u32 = 1;

/// Component name sent in every request envelope.
pub const COMPONENT_NAME: &str = "MA";

/// Content type used for the outbound POST.
pub const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";

pub const RETURN_CODE_SUCCESS: i64 = 0;
pub const RETURN_CODE_PARAM_ERR: i64 = 1001;
pub const RETURN_CODE_HEADER_ERR: i64 = 1002;
pub const RETURN_CODE_SERVE_ERR: i64 = 2000;
pub const RETURN_CODE_SKEY_EXPIRED: i64 = 60011;
pub const RETURN_CODE_WX_SESSION_FAILED: i64 = 60012;
