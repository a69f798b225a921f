//! Local directory sources.

use super::ResolvedDirectory;
use crate::error::{KprofileError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Check that `path` is a readable directory and hand it back unchanged.
pub(super) fn resolve(path: &Path) -> Result<ResolvedDirectory> {
    let metadata = fs::metadata(path).map_err(|e| {
        KprofileError::SourceUnavailable(format!(
            "local source '{}' cannot be accessed: {}",
            path.display(),
            e
        ))
    })?;

    if !metadata.is_dir() {
        return Err(KprofileError::SourceUnavailable(format!(
            "local source '{}' is not a directory",
            path.display()
        )));
    }

    fs::read_dir(path).map_err(|e| {
        KprofileError::SourceUnavailable(format!(
            "local source '{}' is not readable: {}",
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), "using local source directory");
    Ok(ResolvedDirectory::Borrowed(path.to_path_buf()))
}
