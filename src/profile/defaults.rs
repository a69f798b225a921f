//! Default profile synthesis.
//!
//! When `init` runs without a source, a single `local.yml` is written that
//! points at a Kafka broker on localhost.

use super::BOOTSTRAP_SERVERS_KEY;
use super::model::{Cluster, Profile, Runners, Topic, default_runner};
use crate::error::Result;
use crate::fs::atomic_write_file;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the synthesized profile inside the config directory.
pub const DEFAULT_PROFILE_FILE: &str = "local.yml";

const DEFAULT_CLUSTER: &str = "local";
const DEFAULT_BOOTSTRAP_SERVERS: &str = "localhost:9092";
const STRING_DESERIALIZER: &str = "org.apache.kafka.common.serialization.StringDeserializer";
const STRING_SERIALIZER: &str = "org.apache.kafka.common.serialization.StringSerializer";
const DEFAULT_TOPIC_ALIAS: &str = "input";
const DEFAULT_TOPIC_NAME: &str = "input-topic";

/// Outcome of [`write_default_profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultProfileWrite {
    /// The profile was written (fresh, or replacing an existing file).
    Written(PathBuf),
    /// A profile already existed and `overwrite` was false; nothing changed.
    Existing(PathBuf),
}

impl DefaultProfileWrite {
    pub fn path(&self) -> &Path {
        match self {
            DefaultProfileWrite::Written(path) | DefaultProfileWrite::Existing(path) => path,
        }
    }
}

/// Build the default profile: one `local` cluster, one topic alias, local runner.
pub fn synthesize_default_profile() -> Profile {
    let props = BTreeMap::from([
        (
            BOOTSTRAP_SERVERS_KEY.to_string(),
            DEFAULT_BOOTSTRAP_SERVERS.to_string(),
        ),
        ("key.deserializer".to_string(), STRING_DESERIALIZER.to_string()),
        ("value.deserializer".to_string(), STRING_DESERIALIZER.to_string()),
        ("key.serializer".to_string(), STRING_SERIALIZER.to_string()),
        ("value.serializer".to_string(), STRING_SERIALIZER.to_string()),
    ]);

    let topics = BTreeMap::from([(
        DEFAULT_TOPIC_ALIAS.to_string(),
        Topic {
            name: DEFAULT_TOPIC_NAME.to_string(),
            partitions: None,
        },
    )]);

    let cluster = Cluster {
        props,
        topics,
        groups: Vec::new(),
        registry: None,
    };

    Profile {
        clusters: BTreeMap::from([(DEFAULT_CLUSTER.to_string(), cluster)]),
        runners: Some(Runners {
            default: default_runner(),
        }),
        storage: None,
        secrets: None,
    }
}

/// Write the default profile into `config_dir`.
///
/// An existing file is left untouched unless `overwrite` is set; that case is
/// reported as [`DefaultProfileWrite::Existing`], not as an error.
pub fn write_default_profile(config_dir: &Path, overwrite: bool) -> Result<DefaultProfileWrite> {
    let path = config_dir.join(DEFAULT_PROFILE_FILE);

    if path.exists() && !overwrite {
        debug!(path = %path.display(), "default profile already present, leaving it");
        return Ok(DefaultProfileWrite::Existing(path));
    }

    let yaml = synthesize_default_profile().to_yaml()?;
    atomic_write_file(&path, &yaml)?;
    info!(path = %path.display(), "wrote default profile");

    Ok(DefaultProfileWrite::Written(path))
}
