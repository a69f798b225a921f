//! Command implementations for kprofile.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod clusters;
mod environments;
mod init;

use crate::cli::{Cli, Command};
use crate::context::ConfigContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// The config directory is resolved once here and handed to every command.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ConfigContext::resolve(cli.config_dir)?;

    match cli.command {
        Command::Init(args) => init::cmd_init(&ctx, args),
        Command::Clusters(args) => clusters::cmd_clusters(&ctx, args),
        Command::Environments => environments::cmd_environments(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KprofileError;
    use crate::exit_codes;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn dispatch_init_then_list() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_string_lossy().to_string();

        dispatch(parse(&["kprofile", "--config-dir", &dir, "init"])).unwrap();
        dispatch(parse(&["kprofile", "--config-dir", &dir, "environments"])).unwrap();
        dispatch(parse(&["kprofile", "--config-dir", &dir, "clusters"])).unwrap();
    }

    #[test]
    fn dispatch_init_missing_local_source_exits_with_source_failure() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("cfg").to_string_lossy().to_string();
        let missing = temp_dir.path().join("missing").to_string_lossy().to_string();

        let err = dispatch(parse(&[
            "kprofile",
            "--config-dir",
            &dir,
            "init",
            "--from",
            "local",
            "--path",
            &missing,
        ]))
        .unwrap_err();

        assert!(matches!(err, KprofileError::SourceUnavailable(_)));
        assert_eq!(err.exit_code(), exit_codes::SOURCE_FAILURE);
    }
}
