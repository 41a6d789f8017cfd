// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wafer - command-line client for the session-authentication server.
//!
//! This is the binary entry point. It loads configuration, installs logging,
//! and dispatches to the login, check, and config subcommands.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{CheckArgs, LoginArgs};

/// Wafer - log in and check sessions against the session server.
#[derive(Parser, Debug)]
#[command(name = "wafer", version, about, long_about = None)]
struct Cli {
    /// Load this config file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Exchange a login code and encrypted profile for a session.
    Login(LoginArgs),
    /// Verify an existing session id and key.
    Check(CheckArgs),
    /// Print the validated effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => wafer_config::load_and_validate_path(path),
        None => wafer_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            wafer_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    let outcome = match cli.command {
        Commands::Login(args) => commands::run_login(&config, args).await,
        Commands::Check(args) => commands::run_check(&config, args).await,
        Commands::Config => commands::run_config(&config),
    };

    if let Err(exit) = outcome {
        std::process::exit(exit);
    }
}

/// Installs the fmt subscriber on stderr; `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wafer={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
