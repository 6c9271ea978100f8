//! Duration flag parsing
//!
//! `--expiration` and `--max-expiration` take humantime spans (`168d`,
//! `24w`, `4032h`, `4032h0m0s`, `2h 45m`). A bare `0` also means zero.

use std::time::Duration;

/// Parse a duration such as `168d`, `4032h` or `2h45m`.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    humantime::parse_duration(s).map_err(|e| format!("invalid duration {input:?}: {e}"))
}
