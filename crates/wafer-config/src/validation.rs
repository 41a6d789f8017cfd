// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as a non-blank appid, an http(s) endpoint, and a known log level.

use crate::diagnostic::ConfigError;
use crate::model::WaferConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &WaferConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.session.appid.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "session.appid must not be empty".to_string(),
        });
    }

    let url = config.session.auth_server_url.trim();
    if url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "session.auth_server_url must not be empty".to_string(),
        });
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("session.auth_server_url `{url}` must be an http:// or https:// URL"),
        });
    }

    if config.session.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "session.timeout_secs must be at least 1".to_string(),
        });
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
