//! Error types for client-secret generation

use std::path::PathBuf;
use std::time::Duration;

/// Errors from validating, signing or emitting a client secret.
///
/// None of these are recoverable; the caller reports them and stops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required arguments: {}", .0.join(", "))]
    MissingArgument(Vec<&'static str>),

    #[error("invalid expiration: {0}")]
    InvalidExpiration(String),

    #[error("failed to read key file {}: {source}", path.display())]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid private key: {0}")]
    KeyParse(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("failed to write client secret: {0}")]
    Output(String),
}

impl Error {
    pub(crate) fn expiration_too_long(requested: Duration, max: Duration) -> Self {
        Self::InvalidExpiration(format!(
            "{}s exceeds the {}s limit (Apple allows at most 6 months)",
            requested.as_secs(),
            max.as_secs()
        ))
    }
}

/// Result alias for client-secret operations.
pub type Result<T> = std::result::Result<T, Error>;
