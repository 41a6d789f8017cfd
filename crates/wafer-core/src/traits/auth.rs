// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authenticator trait exposing the two session operations.

use async_trait::async_trait;

use crate::error::CallFailure;
use crate::types::{CallInput, CallerResult};

/// Brokers login and session checks against a remote session server.
///
/// Implementations hold only construction-time configuration; every call is
/// an independent transaction.
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    /// Exchanges a login code and encrypted profile for a new session.
    async fn login(&self, input: CallInput<'_>) -> Result<CallerResult, CallFailure>;

    /// Validates an existing session id/key pair.
    async fn check(&self, input: CallInput<'_>) -> Result<CallerResult, CallFailure>;
}
