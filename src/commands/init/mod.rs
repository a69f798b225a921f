//! Implementation of the `kprofile init` command.
//!
//! # What `kprofile init` does
//!
//! 1. With `--recreate`, deletes the config directory and everything in it
//! 2. Creates the config directory (and parents) if missing
//! 3. With `--from local|git`, resolves the source and copies its `*.yml`
//!    profiles into the config directory
//! 4. Without `--from`, writes the default `local.yml` profile
//!
//! Step 1 happens before the source is resolved, so a failing clone still
//! leaves an emptied directory behind.


use crate::cli::{InitArgs, SourceKind};
use crate::context::ConfigContext;
use crate::error::{KprofileError, Result};
use crate::materialize::{CopiedFile, materialize};
use crate::profile::{DefaultProfileWrite, write_default_profile};
use crate::source::{ConfigSource, Credentials};
use std::path::Path;
use tracing::{debug, info};

/// What `init` ended up doing.
#[derive(Debug)]
pub enum InitOutcome {
    /// Profiles were copied from a source.
    Copied(Vec<CopiedFile>),
    /// No source was given; the default profile was handled.
    Default(DefaultProfileWrite),
}

/// Execute the `kprofile init` command.
pub fn cmd_init(ctx: &ConfigContext, args: InitArgs) -> Result<()> {
    let source = source_from_args(&args)?;

    match run_init(ctx, source.as_ref(), args.recreate, args.overwrite)? {
        InitOutcome::Copied(files) => {
            if files.is_empty() {
                println!("No profile files found in the source.");
            }
            for file in &files {
                println!("Copied {}", file.destination.display());
            }
            println!();
            println!("Config directory: {}", ctx.config_dir.display());
        }
        InitOutcome::Default(DefaultProfileWrite::Written(path)) => {
            println!("Created default profile: {}", path.display());
        }
        InitOutcome::Default(DefaultProfileWrite::Existing(path)) => {
            println!("Default profile already exists: {}", path.display());
            println!("Use --overwrite to replace it.");
        }
    }

    Ok(())
}

/// Recreate/ensure the config directory, then copy from `source` or write the default profile.
///
/// A cloned source is removed when this function returns, on success or error.
pub fn run_init(
    ctx: &ConfigContext,
    source: Option<&ConfigSource>,
    recreate: bool,
    overwrite: bool,
) -> Result<InitOutcome> {
    ctx.prepare(recreate)?;

    let Some(source) = source else {
        return write_default_profile(&ctx.config_dir, overwrite).map(InitOutcome::Default);
    };

    info!(source = %source.describe(), "initializing from source");
    let resolved = source.resolve()?;
    if let Some(checkout) = resolved.checkout_root() {
        debug!(checkout = %checkout.display(), "reading profiles from temporary clone");
    }
    let copied = materialize(resolved.path(), &ctx.config_dir, overwrite)?;

    Ok(InitOutcome::Copied(copied))
}

/// Build the configured source from `init` flags.
///
/// Flags belonging to a source kind other than the selected one are rejected.
pub(crate) fn source_from_args(args: &InitArgs) -> Result<Option<ConfigSource>> {
    let git_flags = git_only_flags(args);

    let Some(kind) = args.from else {
        if args.path.is_some() || !git_flags.is_empty() {
            return Err(KprofileError::UserError(
                "--path, --url, --subdirectory, --username and --password require --from.\n\n\
                 Usage:\n  kprofile init --from local --path <DIR>\n  \
                 kprofile init --from git --url <URL>"
                    .to_string(),
            ));
        }
        return Ok(None);
    };

    let source = match kind {
        SourceKind::Local => {
            if !git_flags.is_empty() {
                return Err(KprofileError::UserError(format!(
                    "{} can only be used with --from git.",
                    git_flags.join(", ")
                )));
            }
            let path = args.path.clone().ok_or_else(|| {
                KprofileError::UserError(
                    "--from local requires --path <DIR>.\n\n\
                     Usage: kprofile init --from local --path ./profiles"
                        .to_string(),
                )
            })?;
            ConfigSource::Local { path }
        }
        SourceKind::Git => {
            if args.path.is_some() {
                return Err(KprofileError::UserError(
                    "--path can only be used with --from local.".to_string(),
                ));
            }
            let url = args.url.clone().ok_or_else(|| {
                KprofileError::UserError(
                    "--from git requires --url <URL>.\n\n\
                     Usage: kprofile init --from git --url https://git.example.com/profiles.git"
                        .to_string(),
                )
            })?;
            ConfigSource::Git {
                url,
                subdirectory: args.subdirectory.clone(),
                credentials: Credentials::new(args.username.clone(), args.password.clone()),
            }
        }
    };

    Ok(Some(source))
}

/// Git source flags the user actually set.
fn git_only_flags(args: &InitArgs) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if args.url.is_some() {
        flags.push("--url");
    }
    if args.subdirectory != Path::new(".") {
        flags.push("--subdirectory");
    }
    if args.username.is_some() {
        flags.push("--username");
    }
    if args.password.is_some() {
        flags.push("--password");
    }
    flags
}
