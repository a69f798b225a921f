//! Environment profile model for kprofile.
//!
//! A profile is one `<env>.yml` file in the config directory describing the
//! Kafka clusters, runner selection and optional storage/secrets settings of
//! a named environment. Unknown fields are ignored when reading; absent
//! values and empty collections are omitted when writing.

mod defaults;
mod model;
mod operations;


pub use defaults::{
    DEFAULT_PROFILE_FILE, DefaultProfileWrite, synthesize_default_profile,
    write_default_profile,
};
pub use model::{Cluster, Profile, Registry, Runners, Secrets, Storage, Topic};

/// Extension (without the dot) of files recognized as profiles.
pub const PROFILE_EXTENSION: &str = "yml";

/// Reserved environment name holding settings shared by every environment.
pub const COMMON_ENVIRONMENT: &str = "common";

/// Connection property naming a cluster's broker address.
pub const BOOTSTRAP_SERVERS_KEY: &str = "bootstrap.servers";
