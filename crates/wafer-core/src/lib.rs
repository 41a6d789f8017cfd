// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Wafer session adapter.
//!
//! This crate provides the error type, data model, wire constants, vendor
//! payload, and the seam traits shared by the adapter, its transports, and
//! test doubles.

pub mod constants;
pub mod error;
pub mod payload;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{BoxError, CallFailure, WaferError};
pub use payload::{SessionTicket, VendorBody, VendorPayload};
pub use traits::{HeaderSource, SessionAuthenticator, SessionTransport, TransportResponse};
pub use types::{
    CallInput, CallerResult, CredentialSet, ErrorCategory, InputMode, Operation, RemoteCode,
    SessionData, UserInfo,
};
