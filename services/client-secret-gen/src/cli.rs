//! Command-line surface
//!
//! Flags: `-o`, `--dev-certificate`, `--kid`, `--team-id`, `--client-id`,
//! `--expiration`, `--max-expiration`, `--config`. Each can also come from
//! an environment variable.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::duration::parse_duration;

/// Create a client secret for Sign in with Apple.
///
/// https://developer.apple.com/documentation/accountorganizationaldatasharing/creating-a-client-secret
#[derive(Debug, Parser)]
#[command(name = "apple-client-secret", version)]
pub struct Cli {
    /// Output file; standard output when omitted
    #[arg(short = 'o', long, env = "APPLE_CLIENT_SECRET_OUTPUT", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to the .p8 key (Certificates, Identifiers & Profiles > Keys)
    #[arg(long = "dev-certificate", env = "APPLE_KEY_FILE", value_name = "PATH")]
    pub dev_certificate: Option<PathBuf>,

    /// 10 character key id shown in the key details
    #[arg(long, env = "APPLE_KEY_ID", value_name = "ID")]
    pub kid: Option<String>,

    /// 10 character team id shown next to the developer account name
    #[arg(long, env = "APPLE_TEAM_ID", value_name = "ID")]
    pub team_id: Option<String>,

    /// App ID or Services ID used as client_id when requesting refresh tokens
    #[arg(long, env = "APPLE_CLIENT_ID", value_name = "ID")]
    pub client_id: Option<String>,

    /// Token lifetime, e.g. 168d, 24w, 4032h, 30m [default: 168d]
    #[arg(
        long,
        env = "APPLE_CLIENT_SECRET_EXPIRATION",
        value_name = "DURATION",
        value_parser = parse_duration
    )]
    pub expiration: Option<Duration>,

    /// Longest lifetime accepted [default: 168d]
    #[arg(
        long,
        env = "APPLE_CLIENT_SECRET_MAX_EXPIRATION",
        value_name = "DURATION",
        value_parser = parse_duration
    )]
    pub max_expiration: Option<Duration>,

    /// TOML file supplying defaults for any of the above
    #[arg(long, env = "APPLE_CLIENT_SECRET_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}
