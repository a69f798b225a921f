//! Git command runner for kprofile.
//!
//! Provides a thin wrapper around the `git` executable with captured
//! stdout/stderr. Remote profile sources are fetched through this module.

use crate::error::{KprofileError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

const USERNAME_ENV: &str = "KPROFILE_GIT_USERNAME";
const PASSWORD_ENV: &str = "KPROFILE_GIT_PASSWORD";

/// Inline credential helper answering `get` requests from [`USERNAME_ENV`]
/// and [`PASSWORD_ENV`]. Empty values are not reported.
const CREDENTIAL_HELPER: &str = r#"!f() { test "$1" = get || return 0; test -n "$KPROFILE_GIT_USERNAME" && printf 'username=%s\n' "$KPROFILE_GIT_USERNAME"; test -n "$KPROFILE_GIT_PASSWORD" && printf 'password=%s\n' "$KPROFILE_GIT_PASSWORD"; return 0; }; f"#;

/// Environment that makes git answer credential requests with the given
/// username and password.
///
/// The helper is registered through `GIT_CONFIG_COUNT` (git 2.31+), after an
/// empty `credential.helper` entry that clears any configured helpers. The
/// secrets reach git only through the child's environment: they never appear
/// in argv or in the clone's `.git/config`.
pub fn credential_env(
    username: Option<&str>,
    password: Option<&str>,
) -> Vec<(&'static str, String)> {
    vec![
        ("GIT_CONFIG_COUNT", "2".to_string()),
        ("GIT_CONFIG_KEY_0", "credential.helper".to_string()),
        ("GIT_CONFIG_VALUE_0", String::new()),
        ("GIT_CONFIG_KEY_1", "credential.helper".to_string()),
        ("GIT_CONFIG_VALUE_1", CREDENTIAL_HELPER.to_string()),
        (USERNAME_ENV, username.unwrap_or_default().to_string()),
        (PASSWORD_ENV, password.unwrap_or_default().to_string()),
    ]
}

/// Run a git command in `cwd`.
///
/// Interactive credential prompts are disabled: a clone that needs
/// credentials the caller did not supply fails instead of blocking on a TTY.
/// `envs` are set on the child in addition to the inherited environment.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(KprofileError::SourceUnavailable)` - When git cannot be spawned or exits non-zero
pub fn run_git<P: AsRef<Path>>(
    cwd: P,
    args: &[&str],
    envs: &[(&str, String)],
) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let mut command = Command::new("git");
    command
        .current_dir(cwd)
        .args(args)
        .env("GIT_TERMINAL_PROMPT", "0");
    for (key, value) in envs {
        command.env(key, value);
    }

    let output = command
        .output()
        .map_err(|e| {
            KprofileError::SourceUnavailable(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(KprofileError::SourceUnavailable(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Perform a full clone of `url` into the existing, empty directory `dest`.
///
/// No `--depth` and no `--branch`: the remote's default branch is checked out.
/// `envs` is passed to git as is; see [`credential_env`].
pub fn clone_into(url: &str, dest: &Path, envs: &[(&str, String)]) -> Result<GitOutput> {
    let dest_str = dest.to_string_lossy();
    run_git(dest, &["clone", "--quiet", "--", url, &dest_str], envs)
}
