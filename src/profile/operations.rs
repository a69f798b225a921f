//! Profile loading, serialization and layering.

use super::model::Profile;
use crate::error::{KprofileError, Result};
use std::path::Path;

impl Profile {
    /// Load a profile from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            KprofileError::IoError(format!(
                "failed to read profile '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            KprofileError::ParseError(msg) => {
                KprofileError::ParseError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse a profile from a YAML string. An empty document is an empty profile.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| KprofileError::ParseError(format!("failed to parse profile YAML: {}", e)))
    }

    /// Serialize to block-style YAML, omitting absent values and empty collections.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            KprofileError::ParseError(format!("failed to serialize profile to YAML: {}", e))
        })
    }

    /// Layer an environment profile over the shared `common` profile.
    ///
    /// Clusters are replaced whole by name; the optional sections fall back
    /// to `common` only when the environment leaves them absent.
    pub fn layered(common: Profile, env: Profile) -> Profile {
        let mut clusters = common.clusters;
        clusters.extend(env.clusters);

        Profile {
            clusters,
            runners: env.runners.or(common.runners),
            storage: env.storage.or(common.storage),
            secrets: env.secrets.or(common.secrets),
        }
    }
}
