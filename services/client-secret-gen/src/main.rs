//! Sign in with Apple client-secret generator
//!
//! Single-shot CLI that:
//! 1. Resolves settings from flags, env vars and an optional TOML file
//! 2. Validates identifiers and lifetime
//! 3. Signs an ES256 client secret with the operator's `.p8` key
//! 4. Writes the token to stdout or a file
//!
//! Any failure prints one diagnostic line to stderr and exits non-zero.

mod cli;
mod config;
mod duration;

use std::process::ExitCode;

use anyhow::{Context, Result};
use apple_client_secret::{MAX_EXPIRATION, emit, generate, unix_now};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::{FileConfig, Settings};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries nothing but the token.
///
/// Level from LOG_LEVEL, then RUST_LOG, default `warn`. LOG_FORMAT=json
/// switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let file_config = match cli.config.as_deref() {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            FileConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(cli, file_config);

    if settings.policy.max > MAX_EXPIRATION {
        warn!(
            max_expiration_secs = settings.policy.max.as_secs(),
            documented_limit_secs = MAX_EXPIRATION.as_secs(),
            "expiration ceiling raised above Apple's documented 6 month limit"
        );
    }
    debug!(
        expiration_secs = settings.request.expiration.as_secs(),
        destination = ?settings.destination,
        "settings resolved"
    );

    let issued_at = unix_now()?;
    let secret = generate(&settings.request, &settings.policy, issued_at)
        .context("failed to generate client secret")?;

    emit(&secret.token, &settings.destination)?;
    Ok(())
}
