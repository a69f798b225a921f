//! Copy and removal helpers for the config directory.

use crate::error::{KprofileError, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// Copy `source` to `destination` byte for byte, replacing any existing file.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    fs::copy(source, destination).map_err(|e| {
        KprofileError::IoError(format!(
            "failed to copy '{}' to '{}': {}",
            source.display(),
            destination.display(),
            e
        ))
    })
}

/// Copy `source` to a `destination` that must not exist yet.
///
/// The destination is created with `create_new`, so a file (or a dangling
/// symlink) appearing there fails with `DestinationExists` instead of being
/// written through.
pub fn copy_new_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    let copy_error = |e: io::Error| {
        KprofileError::IoError(format!(
            "failed to copy '{}' to '{}': {}",
            source.display(),
            destination.display(),
            e
        ))
    };

    let mut reader = fs::File::open(source).map_err(copy_error)?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => {
                KprofileError::DestinationExists(destination.to_path_buf())
            }
            _ => copy_error(e),
        })?;

    io::copy(&mut reader, &mut writer).map_err(copy_error)
}

/// True when both paths resolve to the same filesystem entry.
///
/// Paths that cannot be resolved (for example because they do not exist)
/// are never the same.
pub fn is_same_path<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Remove a directory tree. Returns `false` when there was nothing to remove.
pub fn remove_dir_all_if_exists<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let dir = dir.as_ref();

    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(KprofileError::IoError(format!(
            "failed to remove directory '{}': {}",
            dir.display(),
            e
        ))),
    }
}
