//! Profile struct definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One environment profile.
///
/// `storage` and `secrets` are optional sections: `None` means the section is
/// absent from the file, which is distinct from a present-but-empty section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Clusters by name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub clusters: BTreeMap<String, Cluster>,

    /// Which runner executes jobs for this environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runners: Option<Runners>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Secrets>,
}

/// Connection definition for a single Kafka cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    /// Client properties passed verbatim to the Kafka client
    /// (`bootstrap.servers`, serializers, security settings, ...).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, String>,

    /// Topic aliases mapped to their logical topic.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub topics: BTreeMap<String, Topic>,

    /// Consumer group names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// Schema registry endpoint, if the cluster has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<Registry>,
}

/// A logical topic referenced through an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partitions: Option<u32>,
}

/// Schema registry connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub url: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, String>,
}

/// Runner selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runners {
    /// Name of the runner used when none is requested explicitly.
    #[serde(default = "default_runner")]
    pub default: String,
}

impl Default for Runners {
    fn default() -> Self {
        Self {
            default: default_runner(),
        }
    }
}

/// Local storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    pub path: String,
}

/// Secret provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secrets {
    pub provider: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

pub(crate) fn default_runner() -> String {
    "local".to_string()
}
