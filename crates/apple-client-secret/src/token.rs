//! ES256 client-secret JWT assembly and signing
//!
//! Compact JWS: `base64url(header).base64url(claims).base64url(signature)`.
//! Encoding and signing go through `jsonwebtoken`; this module only fixes
//! the header and claims Apple expects.

use std::time::{Duration, SystemTime};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::constants::{ALGORITHM, AUDIENCE, TOKEN_TYPE};
use crate::error::{Error, Result};

/// JOSE header of a client secret: `{"typ":"JWT","alg":"ES256","kid":<key_id>}`.
pub fn es256_header(key_id: &str) -> Header {
    let mut header = Header::new(ALGORITHM);
    header.typ = Some(TOKEN_TYPE.to_owned());
    header.kid = Some(key_id.to_owned());
    header
}

/// Claims Apple requires in a client secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Team id
    pub iss: String,
    /// Services ID or App ID used as `client_id`
    pub sub: String,
    pub aud: String,
    /// Issued at (Unix seconds)
    pub iat: u64,
    /// Expiration (Unix seconds)
    pub exp: u64,
}

impl Claims {
    /// Build claims valid from `issued_at` for `expiration`, truncated to whole seconds.
    pub fn new(team_id: &str, client_id: &str, issued_at: u64, expiration: Duration) -> Self {
        Self {
            iss: team_id.to_owned(),
            sub: client_id.to_owned(),
            aud: AUDIENCE.to_owned(),
            iat: issued_at,
            exp: issued_at.saturating_add(expiration.as_secs()),
        }
    }
}

/// A signed client secret, ready to send as `client_secret`.
#[derive(Debug, Clone)]
pub struct ClientSecret {
    /// Compact JWT
    pub token: String,
    pub header: Header,
    pub claims: Claims,
}

impl ClientSecret {
    /// Encode and sign `header` and `claims` with `key`.
    pub fn sign(header: Header, claims: Claims, key: &EncodingKey) -> Result<Self> {
        let token = encode(&header, &claims, key)
            .map_err(|e| Error::Signing(format!("ES256 encoding failed: {e}")))?;

        Ok(Self {
            token,
            header,
            claims,
        })
    }
}

/// Current wall-clock time in Unix seconds.
pub fn unix_now() -> Result<u64> {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| Error::Signing("system clock is set before the Unix epoch".into()))
}
