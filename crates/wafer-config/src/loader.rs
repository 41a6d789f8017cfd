// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./wafer.toml` > `~/.config/wafer/wafer.toml` > `/etc/wafer/wafer.toml`
//! with environment variable overrides via `WAFER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::WaferConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/wafer/wafer.toml";

/// Configuration file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "wafer.toml";

/// Path of the per-user configuration file, if a config dir is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wafer/wafer.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/wafer/wafer.toml` (system-wide)
/// 3. `~/.config/wafer/wafer.toml` (user XDG config)
/// 4. `./wafer.toml` (local directory)
/// 5. `WAFER_*` environment variables
pub fn load_config() -> Result<WaferConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<WaferConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WaferConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<WaferConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WaferConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(WaferConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Environment provider mapping `WAFER_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys such as
/// `auth_server_url` contain underscores: `WAFER_SESSION_AUTH_SERVER_URL`
/// must become `session.auth_server_url`.
pub(crate) fn env_provider() -> Env {
    Env::prefixed("WAFER_").map(|key| {
        key.as_str()
            .to_ascii_lowercase()
            .replacen("session_", "session.", 1)
            .replacen("logging_", "logging.", 1)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wafer_core::InputMode;

    #[test]
    fn env_overrides_nested_keys_with_underscores() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("WAFER_SESSION_AUTH_SERVER_URL", "http://env.example/");
            jail.set_env("WAFER_SESSION_MODE", "embedded");
            jail.set_env("WAFER_LOGGING_LEVEL", "debug");

            let config: WaferConfig = Figment::new()
                .merge(Serialized::defaults(WaferConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.session.auth_server_url, "http://env.example/");
            assert_eq!(config.session.mode, InputMode::Embedded);
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn path_loader_reads_file_then_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
[session]
appid = "wx-file"
auth_server_url = "http://file.example/"
"#,
            )?;
            jail.set_env("WAFER_SESSION_APPID", "wx-env");

            let config = load_config_from_path(Path::new("custom.toml"))?;
            assert_eq!(config.session.appid, "wx-env");
            assert_eq!(config.session.auth_server_url, "http://file.example/");
            Ok(())
        });
    }
}
