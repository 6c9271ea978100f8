//! Configuration types and loading
//!
//! Precedence: CLI flags > env vars > config file > defaults. Flags and env
//! vars are handled by clap; this module overlays them on the optional TOML
//! file. Relative paths in the file resolve against the file's directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use apple_client_secret::{
    ClientSecretRequest, DEFAULT_EXPIRATION, Destination, ExpirationPolicy, MAX_EXPIRATION,
};
use serde::Deserialize;

use crate::cli::Cli;
use crate::duration::parse_duration;

/// Contents of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub team_id: Option<String>,
    pub client_id: Option<String>,
    pub key_id: Option<String>,
    pub key_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(rename = "expiration")]
    expiration_raw: Option<String>,
    #[serde(rename = "max_expiration")]
    max_expiration_raw: Option<String>,
    /// Parsed from `expiration` during load
    #[serde(skip)]
    pub expiration: Option<Duration>,
    /// Parsed from `max_expiration` during load
    #[serde(skip)]
    pub max_expiration: Option<Duration>,
}

impl FileConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| common::Error::io(path, e))?;
        let mut config: FileConfig = toml::from_str(&contents)?;

        config.expiration = parse_field("expiration", config.expiration_raw.as_deref())?;
        config.max_expiration =
            parse_field("max_expiration", config.max_expiration_raw.as_deref())?;

        let base = path.parent().unwrap_or(Path::new(""));
        config.key_file = resolve_relative(base, config.key_file);
        config.output = resolve_relative(base, config.output);

        Ok(config)
    }
}

/// Empty paths count as unset; relative ones hang off `base`.
fn resolve_relative(base: &Path, path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
        .map(|p| base.join(p))
}

fn parse_field(name: &str, raw: Option<&str>) -> common::Result<Option<Duration>> {
    raw.map(|value| parse_duration(value).map_err(|e| common::Error::Config(format!("{name}: {e}"))))
        .transpose()
}

/// Fully resolved settings for one run
#[derive(Debug)]
pub struct Settings {
    pub request: ClientSecretRequest,
    pub policy: ExpirationPolicy,
    pub destination: Destination,
}

impl Settings {
    /// Overlay CLI/env values on the config file. Missing identifiers become
    /// empty strings so validation reports them all at once.
    pub fn resolve(cli: Cli, file: FileConfig) -> Self {
        let request = ClientSecretRequest {
            team_id: cli.team_id.or(file.team_id).unwrap_or_default(),
            client_id: cli.client_id.or(file.client_id).unwrap_or_default(),
            key_id: cli.kid.or(file.key_id).unwrap_or_default(),
            key_file: cli.dev_certificate.or(file.key_file),
            expiration: cli
                .expiration
                .or(file.expiration)
                .unwrap_or(DEFAULT_EXPIRATION),
        };
        let policy = ExpirationPolicy {
            max: cli
                .max_expiration
                .or(file.max_expiration)
                .unwrap_or(MAX_EXPIRATION),
        };
        let destination = Destination::from_path(cli.output.or(file.output));

        Self {
            request,
            policy,
            destination,
        }
    }
}
