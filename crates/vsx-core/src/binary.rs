//! Editor binary resolution

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Binaries tried in order: the stable release first, then insiders.
pub const DEFAULT_CANDIDATES: &[&str] = &["code", "code-insiders"];

/// Resolve the first candidate that exists.
///
/// A candidate containing a path separator is taken as a path and must point
/// at an existing file; anything else is looked up on `PATH`.
pub fn resolve_binary<S: AsRef<str>>(candidates: &[S]) -> Result<PathBuf> {
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if let Some(path) = lookup(candidate) {
            tracing::debug!(candidate, path = %path.display(), "Resolved editor binary");
            return Ok(path);
        }
        tracing::debug!(candidate, "Editor binary candidate not found");
    }

    Err(Error::BinaryNotFound {
        candidates: candidates.iter().map(|c| c.as_ref().to_string()).collect(),
    })
}

fn lookup(candidate: &str) -> Option<PathBuf> {
    let path = Path::new(candidate);
    if path.components().count() > 1 || path.is_absolute() {
        return path.is_file().then(|| path.to_path_buf());
    }
    which::which(candidate).ok()
}
