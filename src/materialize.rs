//! Copying profile files into the config directory.
//!
//! Only regular files directly inside the source directory whose name ends
//! in `.yml` are copied; everything else is ignored. Copies are flat and
//! byte-exact.
//!
//! Materialization is not transactional. On a conflict the run stops at the
//! conflicting file, and files copied before it stay in place.

use crate::error::{KprofileError, Result};
use crate::fs::{copy_file, copy_new_file, is_same_path};
use crate::profile::PROFILE_EXTENSION;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One file copied by [`materialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// List recognized profile files directly under `source_dir`, sorted by name.
pub fn list_profile_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let not_listable = |source: std::io::Error| KprofileError::SourceNotListable {
        path: source_dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(not_listable)? {
        let entry = entry.map_err(not_listable)?;
        let file_type = entry.file_type().map_err(not_listable)?;
        let path = entry.path();

        if file_type.is_file() && is_profile_file(&path) {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-profile entry");
        }
    }

    files.sort();
    Ok(files)
}

/// Copy every profile file from `source_dir` into `dest_dir`.
///
/// `dest_dir` is expected to exist. An existing destination file fails the
/// whole run with `DestinationExists` unless `overwrite` is set. A source that
/// resolves to `dest_dir` itself is rejected before anything is copied.
pub fn materialize(source_dir: &Path, dest_dir: &Path, overwrite: bool) -> Result<Vec<CopiedFile>> {
    if is_same_path(source_dir, dest_dir) {
        return Err(KprofileError::UserError(format!(
            "source directory '{}' is the config directory itself; nothing to copy",
            source_dir.display()
        )));
    }

    let files = list_profile_files(source_dir)?;
    let mut copied = Vec::with_capacity(files.len());

    for source in files {
        let Some(name) = source.file_name() else {
            continue;
        };
        let destination = dest_dir.join(name);

        let bytes = if overwrite {
            // Copying a file onto itself truncates it.
            if is_same_path(&source, &destination) {
                return Err(KprofileError::UserError(format!(
                    "'{}' resolves to its own source '{}'",
                    destination.display(),
                    source.display()
                )));
            }
            copy_file(&source, &destination)?
        } else {
            copy_new_file(&source, &destination)?
        };
        info!(
            source = %source.display(),
            destination = %destination.display(),
            bytes,
            "copied profile"
        );
        copied.push(CopiedFile {
            source,
            destination,
        });
    }

    Ok(copied)
}

fn is_profile_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == PROFILE_EXTENSION)
}
