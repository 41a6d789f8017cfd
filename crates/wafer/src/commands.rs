// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations for `wafer login`, `wafer check`, and `wafer config`.
//!
//! Results go to stdout as pretty JSON. Errors go to stderr; in embedded mode
//! the vendor payload of a failed call is still printed to stdout.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Duration;

use clap::Args;
use tracing::debug;
use wafer_config::WaferConfig;
use wafer_core::{CallFailure, CallInput, CallerResult, InputMode, Operation};
use wafer_session::{HttpTransport, SessionAuthenticator, SessionSettings, WaferSession};

/// Arguments for `wafer login`.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Login code issued to the client.
    #[arg(long, conflicts_with = "embedded")]
    pub code: Option<String>,
    /// Encrypted user profile.
    #[arg(long, conflicts_with = "embedded")]
    pub encrypted_data: Option<String>,
    /// Initialization vector for the encrypted profile.
    #[arg(long, conflicts_with = "embedded")]
    pub iv: Option<String>,
    /// Read credentials from `-H` request headers instead.
    #[arg(long)]
    pub embedded: bool,
    /// Request header, repeatable.
    #[arg(short = 'H', long = "header", value_name = "NAME=VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,
}

/// Arguments for `wafer check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Session id.
    #[arg(long, conflicts_with = "embedded")]
    pub id: Option<String>,
    /// Session key.
    #[arg(long, conflicts_with = "embedded")]
    pub skey: Option<String>,
    /// Read credentials from `-H` request headers instead.
    #[arg(long)]
    pub embedded: bool,
    /// Request header, repeatable.
    #[arg(short = 'H', long = "header", value_name = "NAME=VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,
}

/// Parses `NAME=VALUE`. The value may be empty; the name may not.
pub fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("invalid header `{raw}`, expected NAME=VALUE")),
    }
}

pub async fn run_login(config: &WaferConfig, args: LoginArgs) -> Result<(), i32> {
    let positional = vec![
        args.code.unwrap_or_default(),
        args.encrypted_data.unwrap_or_default(),
        args.iv.unwrap_or_default(),
    ];
    run(config, Operation::Login, args.embedded, args.headers, positional).await
}

pub async fn run_check(config: &WaferConfig, args: CheckArgs) -> Result<(), i32> {
    let positional = vec![args.id.unwrap_or_default(), args.skey.unwrap_or_default()];
    run(config, Operation::Check, args.embedded, args.headers, positional).await
}

/// Prints the effective configuration as TOML.
pub fn run_config(config: &WaferConfig) -> Result<(), i32> {
    match toml::to_string_pretty(config) {
        Ok(rendered) => {
            print!("{rendered}");
            Ok(())
        }
        Err(e) => {
            eprintln!("wafer: failed to render config: {e}");
            Err(1)
        }
    }
}

async fn run(
    config: &WaferConfig,
    operation: Operation,
    embedded: bool,
    headers: Vec<(String, String)>,
    positional: Vec<String>,
) -> Result<(), i32> {
    let mut settings = SessionSettings::from(&config.session);
    settings.mode = if embedded {
        InputMode::Embedded
    } else {
        InputMode::Standalone
    };

    let transport = match HttpTransport::new(Duration::from_secs(config.session.timeout_secs)) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("wafer: {e}");
            return Err(1);
        }
    };
    let session = WaferSession::with_transport(settings, transport);

    let bag: HashMap<String, String> = headers.into_iter().collect();
    let input = if embedded {
        CallInput::from_headers(&bag)
    } else {
        CallInput::from_args(&positional)
    };

    let outcome = dispatch(&session, operation, input).await;
    match render(outcome, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(0) => Ok(()),
        Ok(code) => Err(code),
        Err(e) => {
            eprintln!("wafer: failed to write output: {e}");
            Err(1)
        }
    }
}

async fn dispatch<A: SessionAuthenticator + ?Sized>(
    auth: &A,
    operation: Operation,
    input: CallInput<'_>,
) -> Result<CallerResult, CallFailure> {
    debug!(%operation, "dispatching");
    match operation {
        Operation::Login => auth.login(input).await,
        Operation::Check => auth.check(input).await,
    }
}

/// Writes the outcome and returns the process exit code.
fn render(
    outcome: Result<CallerResult, CallFailure>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<i32> {
    match outcome {
        Ok(result) => {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&result)?)?;
            Ok(0)
        }
        Err(failure) => {
            writeln!(stderr, "wafer: {}", failure.error)?;
            if let Some(payload) = &failure.result.vendor_payload {
                writeln!(stdout, "{}", serde_json::to_string_pretty(payload)?)?;
            }
            Ok(1)
        }
    }
}
