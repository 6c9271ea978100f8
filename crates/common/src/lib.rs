//! Shared types for the client-secret workspace

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
