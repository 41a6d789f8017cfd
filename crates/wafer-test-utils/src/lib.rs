// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Wafer integration tests.
//!
//! Provides a scripted transport and canned server replies for fast,
//! deterministic tests without a running session server.
//!
//! # Components
//!
//! - [`MockTransport`] - Transport with queued replies and request capture
//! - [`fixtures`] - Reply bodies, session data, and credential headers

pub mod fixtures;
pub mod mock_transport;

pub use mock_transport::{MockTransport, RecordedCall};
