//! Sign in with Apple client-secret generation
//!
//! Apple's token endpoint takes a short-lived ES256 JWT in place of a static
//! `client_secret`. This crate builds one from the team id, client id and
//! key id plus the `.p8` key Apple issued.
//!
//! Flow:
//! 1. `ClientSecretRequest::validate()` checks identifiers and lifetime
//! 2. `key::load_signing_key()` reads and parses the `.p8` file
//! 3. `ClientSecret::sign()` encodes header and claims and signs them
//! 4. `output::emit()` writes the token to stdout or a file
//!
//! `generate()` runs steps 1 to 3. Nothing here exits the process or talks to
//! the network.

pub mod constants;
pub mod error;
pub mod key;
pub mod output;
pub mod request;
pub mod token;

pub use constants::*;
pub use error::{Error, Result};
pub use output::{Destination, emit};
pub use request::{ClientSecretRequest, ExpirationPolicy, generate};
pub use token::{Claims, ClientSecret, es256_header, unix_now};
