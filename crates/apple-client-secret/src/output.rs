//! Writing the finished token
//!
//! The token is written exactly as produced, with no trailing newline.
//! Output only happens once the token is fully signed, so a failed run
//! never touches the destination.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Where the client secret goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `None` or an empty path means stdout.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Self::File(p),
            _ => Self::Stdout,
        }
    }
}

/// Write `token` to `destination`.
pub fn emit(token: &str, destination: &Destination) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut out = std::io::stdout().lock();
            write_to(&mut out, token)
        }
        Destination::File(path) => write_file(path, token),
    }
}

/// Write `token` verbatim and flush.
pub fn write_to<W: Write>(out: &mut W, token: &str) -> Result<()> {
    out.write_all(token.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| Error::Output(format!("writing token: {e}")))
}

/// Open the target itself, creating or truncating it, and write once.
///
/// Writing through the path keeps symlinks and device nodes (`/dev/stdout`)
/// intact and only needs write access to the file, not its directory.
/// New files get 0600 on unix since the token is a credential.
fn write_file(path: &Path, token: &str) -> Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .map_err(|e| Error::Output(format!("opening {}: {e}", path.display())))?;
    write_to(&mut file, token)?;
    debug!(path = %path.display(), "wrote client secret");
    Ok(())
}
