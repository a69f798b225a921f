//! Git repository sources.

use super::ResolvedDirectory;
use crate::error::{KprofileError, Result};
use crate::git;
use std::path::{Component, Path};
use tracing::{debug, info, warn};

const CHECKOUT_PREFIX: &str = "kprofile-source-";

/// Username/password pair for HTTP(S) remotes. Either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    /// True when neither a username nor a password was supplied.
    pub fn is_anonymous(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    /// Environment handing these credentials to `git clone` for `url`.
    ///
    /// Empty for anonymous credentials and for non-HTTP URLs, where git never
    /// asks a credential helper.
    fn git_env(&self, url: &str) -> Vec<(&'static str, String)> {
        if self.is_anonymous() {
            return Vec::new();
        }
        if !is_http_url(url) {
            warn!(
                url = %redact_url(url),
                "credentials are only supported for http(s) remotes; ignoring them"
            );
            return Vec::new();
        }

        git::credential_env(self.username.as_deref(), self.password.as_deref())
    }
}

/// Clone `url` into a fresh temporary directory and return `subdirectory` within it.
///
/// The subdirectory must stay inside the clone; its existence is not checked
/// here, a missing one surfaces when the directory is listed.
pub(super) fn resolve(
    url: &str,
    subdirectory: &Path,
    credentials: &Credentials,
) -> Result<ResolvedDirectory> {
    check_subdirectory(subdirectory)?;

    let checkout = tempfile::Builder::new()
        .prefix(CHECKOUT_PREFIX)
        .tempdir()
        .map_err(|e| {
            KprofileError::IoError(format!("failed to create temporary clone directory: {}", e))
        })?;

    debug!(
        url = %redact_url(url),
        checkout = %checkout.path().display(),
        anonymous = credentials.is_anonymous(),
        "cloning profile repository"
    );

    git::clone_into(url, checkout.path(), &credentials.git_env(url)).map_err(|e| {
        let hint = if credentials.is_anonymous() {
            "\n\nNo credentials were supplied. If the repository is private, \
             pass --username and --password."
        } else {
            ""
        };
        KprofileError::SourceUnavailable(format!(
            "failed to clone '{}': {}{}",
            redact_url(url),
            redact_secret(&e.to_string(), credentials),
            hint
        ))
    })?;

    info!(url = %redact_url(url), "cloned profile repository");

    let dir = checkout.path().join(subdirectory);
    Ok(ResolvedDirectory::Cloned { checkout, dir })
}

/// Reject subdirectories that are absolute or climb out of the clone.
fn check_subdirectory(subdirectory: &Path) -> Result<()> {
    let escapes = subdirectory.components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(KprofileError::UserError(format!(
            "subdirectory '{}' must be a relative path inside the repository (no '..').",
            subdirectory.display()
        )));
    }
    Ok(())
}

/// Replace the password in a URL's user-info with `***`.
pub(super) fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    let authority = &rest[..authority_end];

    match authority.rfind('@') {
        Some(at) => {
            let userinfo = &authority[..at];
            let user = userinfo.split(':').next().unwrap_or("");
            let masked = if userinfo.contains(':') {
                format!("{}:***", user)
            } else {
                user.to_string()
            };
            format!("{}://{}{}", scheme, masked, &rest[at..])
        }
        None => url.to_string(),
    }
}

fn redact_secret(message: &str, credentials: &Credentials) -> String {
    match credentials.password.as_deref() {
        Some(password) if !password.is_empty() => message.replace(password, "***"),
        _ => message.to_string(),
    }
}

fn is_http_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}
