// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Wafer session adapter.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use wafer_core::InputMode;

/// Top-level Wafer configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WaferConfig {
    /// Session server connection settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging settings for the `wafer` binary.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session server connection and credential-source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Mini-program appid sent with every remote call.
    #[serde(default)]
    pub appid: String,

    /// Full URL of the session-authentication server endpoint.
    #[serde(default)]
    pub auth_server_url: String,

    /// Whether credentials come from SDK request headers or explicit arguments.
    #[serde(default)]
    pub mode: InputMode,

    /// Deadline for a single request to the session server, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            appid: String::new(),
            auth_server_url: String::new(),
            mode: InputMode::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
