//! Read-only projections over the config directory.

use crate::error::{KprofileError, Result};
use crate::profile::{BOOTSTRAP_SERVERS_KEY, COMMON_ENVIRONMENT, Profile};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Flattened view of one cluster for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brokers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    /// Topic aliases ordered by alias.
    pub topics: Vec<TopicRef>,
    pub groups: Vec<String>,
}

/// An `(alias, logical topic name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRef {
    pub alias: String,
    pub name: String,
}

impl TopicRef {
    fn new(alias: &str, name: &str) -> Self {
        Self {
            alias: alias.to_string(),
            name: name.to_string(),
        }
    }
}

/// One record per cluster, ordered by cluster name.
pub fn list_clusters(profile: &Profile) -> Vec<ClusterRecord> {
    profile
        .clusters
        .iter()
        .map(|(name, cluster)| ClusterRecord {
            name: name.clone(),
            brokers: cluster.props.get(BOOTSTRAP_SERVERS_KEY).cloned(),
            registry: cluster.registry.as_ref().map(|r| r.url.clone()),
            topics: cluster
                .topics
                .iter()
                .map(|(alias, topic)| TopicRef::new(alias, &topic.name))
                .collect(),
            groups: cluster.groups.clone(),
        })
        .collect()
}

/// Environment names found in `config_dir`, sorted and without `common`.
///
/// Each immediate child (file or directory) names an environment after its
/// extension is stripped. Hidden entries are skipped. A missing directory has
/// no environments.
pub fn list_environments(config_dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(config_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(KprofileError::IoError(format!(
                "failed to list config directory '{}': {}",
                config_dir.display(),
                e
            )));
        }
    };

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            KprofileError::IoError(format!(
                "failed to list config directory '{}': {}",
                config_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.starts_with('.') || stem == COMMON_ENVIRONMENT {
            continue;
        }
        names.insert(stem.to_string());
    }

    Ok(names.into_iter().collect())
}
