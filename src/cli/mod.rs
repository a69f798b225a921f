//! CLI argument parsing for kprofile.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// kprofile: bootstrap and inspect named Kafka environment profiles.
///
/// Profiles live in a config directory, one `<environment>.yml` per
/// environment plus an optional `common.yml` with shared settings.
#[derive(Parser, Debug)]
#[command(name = "kprofile")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config directory (default: $KPROFILE_HOME, then ~/.kprofile).
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for kprofile.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Populate the config directory.
    ///
    /// Copies `*.yml` profiles from a local directory or a git repository,
    /// or writes a default `local.yml` when no source is given.
    Init(InitArgs),

    /// List the clusters of an environment.
    Clusters(ClustersArgs),

    /// List the environments in the config directory.
    #[command(alias = "envs")]
    Environments,
}

/// Where `init` takes profiles from.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// An existing directory (`--path`).
    Local,
    /// A git repository (`--url`).
    Git,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Delete the config directory before doing anything else.
    #[arg(long)]
    pub recreate: bool,

    /// Replace profile files that already exist.
    #[arg(long)]
    pub overwrite: bool,

    /// Source of the profiles. Omit to write the default profile.
    #[arg(long, value_enum)]
    pub from: Option<SourceKind>,

    /// Directory to copy from (with `--from local`).
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Repository to clone (with `--from git`).
    #[arg(long)]
    pub url: Option<String>,

    /// Directory inside the repository holding the profiles.
    #[arg(long, default_value = ".")]
    pub subdirectory: PathBuf,

    /// Username for an HTTP(S) repository.
    #[arg(long)]
    pub username: Option<String>,

    /// Password or token for an HTTP(S) repository.
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the `clusters` command.
#[derive(Parser, Debug)]
pub struct ClustersArgs {
    /// Environment to list clusters for.
    #[arg(short, long, default_value = "local")]
    pub env: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_defaults() {
        let cli = Cli::try_parse_from(["kprofile", "init"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert!(!args.recreate);
            assert!(!args.overwrite);
            assert!(args.from.is_none());
            assert_eq!(args.subdirectory, PathBuf::from("."));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_init_local() {
        let cli = Cli::try_parse_from([
            "kprofile",
            "init",
            "--from",
            "local",
            "--path",
            "/srv/profiles",
            "--overwrite",
        ])
        .unwrap();
        if let Command::Init(args) = cli.command {
            assert_eq!(args.from, Some(SourceKind::Local));
            assert_eq!(args.path, Some(PathBuf::from("/srv/profiles")));
            assert!(args.overwrite);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_init_git() {
        let cli = Cli::try_parse_from([
            "kprofile",
            "init",
            "--recreate",
            "--from",
            "git",
            "--url",
            "https://git.example.com/profiles.git",
            "--subdirectory",
            "envs",
            "--username",
            "ci",
            "--password",
            "token",
        ])
        .unwrap();
        if let Command::Init(args) = cli.command {
            assert!(args.recreate);
            assert_eq!(args.from, Some(SourceKind::Git));
            assert_eq!(args.url.as_deref(), Some("https://git.example.com/profiles.git"));
            assert_eq!(args.subdirectory, PathBuf::from("envs"));
            assert_eq!(args.username.as_deref(), Some("ci"));
            assert_eq!(args.password.as_deref(), Some("token"));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_unknown_source_kind_fails() {
        assert!(Cli::try_parse_from(["kprofile", "init", "--from", "s3"]).is_err());
    }

    #[test]
    fn parse_clusters_default_env() {
        let cli = Cli::try_parse_from(["kprofile", "clusters"]).unwrap();
        if let Command::Clusters(args) = cli.command {
            assert_eq!(args.env, "local");
        } else {
            panic!("Expected Clusters command");
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["kprofile", "environments", "--config-dir", "/cfg", "-vv"]).unwrap();
        assert!(matches!(cli.command, Command::Environments));
        assert_eq!(cli.config_dir, Some(PathBuf::from("/cfg")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parse_envs_alias() {
        let cli = Cli::try_parse_from(["kprofile", "envs"]).unwrap();
        assert!(matches!(cli.command, Command::Environments));
    }
}
