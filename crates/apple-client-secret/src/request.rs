//! Operator input validation and the end-to-end generate step

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::constants::{APPLE_ID_LEN, DEFAULT_EXPIRATION, MAX_EXPIRATION};
use crate::error::{Error, Result};
use crate::key::load_signing_key;
use crate::token::{Claims, ClientSecret, es256_header};

/// Upper bound on the requested lifetime.
///
/// Defaults to Apple's documented 6 month ceiling. Apple enforces the real
/// limit server side, so the bound can be moved if that limit changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    pub max: Duration,
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self {
            max: MAX_EXPIRATION,
        }
    }
}

/// Everything needed to mint one client secret.
#[derive(Debug, Clone)]
pub struct ClientSecretRequest {
    pub team_id: String,
    pub client_id: String,
    pub key_id: String,
    /// Path to the `.p8` key. `None` fails at key-load time, after validation.
    pub key_file: Option<PathBuf>,
    pub expiration: Duration,
}

impl ClientSecretRequest {
    pub fn new(
        team_id: impl Into<String>,
        client_id: impl Into<String>,
        key_id: impl Into<String>,
        key_file: Option<PathBuf>,
    ) -> Self {
        Self {
            team_id: team_id.into(),
            client_id: client_id.into(),
            key_id: key_id.into(),
            key_file,
            expiration: DEFAULT_EXPIRATION,
        }
    }

    #[must_use]
    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = expiration;
        self
    }

    /// Check identifiers and lifetime. Touches nothing outside `self`.
    pub fn validate(&self, policy: &ExpirationPolicy) -> Result<()> {
        let missing: Vec<&'static str> = [
            ("team id", &self.team_id),
            ("client id", &self.client_id),
            ("key id", &self.key_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(Error::MissingArgument(missing));
        }

        if self.expiration > policy.max {
            return Err(Error::expiration_too_long(self.expiration, policy.max));
        }
        if self.expiration.as_secs() == 0 {
            warn!("expiration under one second, the token expires as it is issued");
        }

        for (name, value) in [("team id", &self.team_id), ("key id", &self.key_id)] {
            if value.chars().count() != APPLE_ID_LEN {
                warn!(
                    field = name,
                    value = %value,
                    expected_len = APPLE_ID_LEN,
                    "identifier length differs from what Apple issues"
                );
            }
        }

        Ok(())
    }
}

/// Validate `request`, load its key and sign a client secret issued at `issued_at`.
///
/// Validation runs to completion before the key file is opened.
pub fn generate(
    request: &ClientSecretRequest,
    policy: &ExpirationPolicy,
    issued_at: u64,
) -> Result<ClientSecret> {
    request.validate(policy)?;

    let key_file = request.key_file.as_ref().ok_or_else(|| Error::KeyRead {
        path: PathBuf::from("<unset>"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no key file given"),
    })?;
    let key = load_signing_key(key_file)?;
    debug!(path = %key_file.display(), "loaded signing key");

    let secret = ClientSecret::sign(
        es256_header(&request.key_id),
        Claims::new(
            &request.team_id,
            &request.client_id,
            issued_at,
            request.expiration,
        ),
        &key,
    )?;

    info!(
        kid = %request.key_id,
        iss = %secret.claims.iss,
        sub = %secret.claims.sub,
        iat = secret.claims.iat,
        exp = secret.claims.exp,
        "signed client secret"
    );
    Ok(secret)
}
