//! Sign in with Apple client-secret constants
//!
//! Values fixed by Apple's client-secret contract:
//! <https://developer.apple.com/documentation/accountorganizationaldatasharing/creating-a-client-secret>

use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Audience every client secret must carry
pub const AUDIENCE: &str = "https://appleid.apple.com";

/// JWS algorithm Apple accepts (ECDSA over P-256 with SHA-256)
pub const ALGORITHM: Algorithm = Algorithm::ES256;

/// JOSE `typ` header value
pub const TOKEN_TYPE: &str = "JWT";

/// Length of the team id and key id Apple issues.
pub const APPLE_ID_LEN: usize = 10;

const DAY: u64 = 24 * 60 * 60;

/// Apple rejects client secrets that live longer than 6 months.
/// Counted as 6 × 28 days, the conservative reading of "6 months".
pub const MAX_EXPIRATION: Duration = Duration::from_secs(6 * 28 * DAY);

/// Lifetime used when the operator does not ask for one
pub const DEFAULT_EXPIRATION: Duration = MAX_EXPIRATION;
