// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam traits between the adapter and its collaborators.
//!
//! The inbound request is only ever a header lookup, the outbound service is
//! only ever "POST JSON, get bytes back", and embedding applications see the
//! adapter through [`SessionAuthenticator`].

pub mod auth;
pub mod headers;
pub mod transport;

pub use auth::SessionAuthenticator;
pub use headers::HeaderSource;
pub use transport::{SessionTransport, TransportResponse};
