//! Config directory resolution for kprofile.
//!
//! Every command operates on a single config directory holding one profile
//! file per named environment. The directory is chosen, in order, from the
//! `--config-dir` flag, the `KPROFILE_HOME` environment variable, or
//! `$HOME/.kprofile`.

use crate::error::{KprofileError, Result};
use crate::fs::remove_dir_all_if_exists;
use crate::profile::{COMMON_ENVIRONMENT, DEFAULT_PROFILE_FILE, PROFILE_EXTENSION};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the config directory location.
pub const CONFIG_DIR_ENV: &str = "KPROFILE_HOME";

/// Directory name under `$HOME` used when nothing else is configured.
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".kprofile";

/// Resolved location of the config directory.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    /// Absolute or caller-relative path to the config directory.
    pub config_dir: PathBuf,
}

impl ConfigContext {
    /// Resolve the config directory from an explicit flag or the environment.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let home = env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .map(PathBuf::from);
        Self::resolve_from(explicit, env::var_os(CONFIG_DIR_ENV).map(PathBuf::from), home)
    }

    /// Resolve from explicit values (testable helper).
    fn resolve_from(
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Result<Self> {
        let config_dir = explicit
            .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| home.map(|h| h.join(DEFAULT_CONFIG_DIR_NAME)))
            .ok_or_else(|| {
                KprofileError::UserError(format!(
                    "cannot determine the config directory.\n\n\
                     Pass --config-dir <DIR> or set {}.",
                    CONFIG_DIR_ENV
                ))
            })?;

        debug!(config_dir = %config_dir.display(), "resolved config directory");
        Ok(Self::at(config_dir))
    }

    /// Context for a known directory.
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            config_dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the profile file for environment `name`.
    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.config_dir
            .join(format!("{}.{}", name, PROFILE_EXTENSION))
    }

    /// Path of the shared settings file.
    pub fn common_path(&self) -> PathBuf {
        self.profile_path(COMMON_ENVIRONMENT)
    }

    /// Path the synthesized default profile is written to.
    pub fn default_profile_path(&self) -> PathBuf {
        self.config_dir.join(DEFAULT_PROFILE_FILE)
    }

    /// Apply the recreate policy, then make sure the directory exists.
    ///
    /// With `recreate` the directory and everything in it is deleted first,
    /// so the caller always continues from an empty directory.
    pub fn prepare(&self, recreate: bool) -> Result<()> {
        if recreate && remove_dir_all_if_exists(&self.config_dir)? {
            info!(config_dir = %self.config_dir.display(), "removed existing config directory");
        }

        fs::create_dir_all(&self.config_dir).map_err(|e| {
            KprofileError::IoError(format!(
                "failed to create config directory '{}': {}",
                self.config_dir.display(),
                e
            ))
        })
    }
}
