//! Profile sources.
//!
//! A source is where `init` copies profile files from. Each variant resolves
//! to exactly one directory on the local filesystem:
//!
//! - `Local`: a directory owned by the caller. It is read, never modified.
//! - `Git`: a repository cloned into a fresh temporary directory owned by the
//!   returned [`ResolvedDirectory`]. The clone is deleted when that value is
//!   dropped. A process killed before then leaves the directory behind.

mod local;
mod remote;

#[cfg(test)]
mod tests;

use crate::error::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use remote::Credentials;

/// Where profile files are acquired from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// An existing directory on this machine.
    Local { path: PathBuf },
    /// A remote git repository, cloned in full from its default branch.
    Git {
        url: String,
        /// Directory inside the clone holding the profiles (`.` for the root).
        subdirectory: PathBuf,
        credentials: Credentials,
    },
}

/// A source directory ready to be listed.
#[derive(Debug)]
pub enum ResolvedDirectory {
    /// Caller-owned directory.
    Borrowed(PathBuf),
    /// Clone owned by this value; removed on drop.
    Cloned {
        checkout: TempDir,
        dir: PathBuf,
    },
}

impl ResolvedDirectory {
    /// Directory the profile files are read from.
    pub fn path(&self) -> &Path {
        match self {
            ResolvedDirectory::Borrowed(dir) => dir,
            ResolvedDirectory::Cloned { dir, .. } => dir,
        }
    }

    /// Root of the temporary clone, if this directory owns one.
    pub fn checkout_root(&self) -> Option<&Path> {
        match self {
            ResolvedDirectory::Borrowed(_) => None,
            ResolvedDirectory::Cloned { checkout, .. } => Some(checkout.path()),
        }
    }
}

impl ConfigSource {
    /// Resolve this source into a readable directory.
    ///
    /// Fails with `SourceUnavailable` when a local path is missing or not a
    /// directory, or when the clone fails.
    pub fn resolve(&self) -> Result<ResolvedDirectory> {
        match self {
            ConfigSource::Local { path } => local::resolve(path),
            ConfigSource::Git {
                url,
                subdirectory,
                credentials,
            } => remote::resolve(url, subdirectory, credentials),
        }
    }

    /// Short human-readable description for log and console output.
    pub fn describe(&self) -> String {
        match self {
            ConfigSource::Local { path } => format!("local directory '{}'", path.display()),
            ConfigSource::Git {
                url, subdirectory, ..
            } => format!(
                "git repository '{}' (subdirectory '{}')",
                remote::redact_url(url),
                subdirectory.display()
            ),
        }
    }
}
