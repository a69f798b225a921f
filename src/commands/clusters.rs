//! Implementation of the `kprofile clusters` command.
//!
//! Loads `<env>.yml` layered over `common.yml` (when present) and renders
//! one record per cluster as YAML.

use crate::cli::ClustersArgs;
use crate::context::ConfigContext;
use crate::error::{KprofileError, Result};
use crate::profile::Profile;
use crate::views::list_clusters;

/// Execute the `kprofile clusters` command.
pub fn cmd_clusters(ctx: &ConfigContext, args: ClustersArgs) -> Result<()> {
    let profile = load_environment(ctx, &args.env)?;
    let records = list_clusters(&profile);

    if records.is_empty() {
        println!("No clusters defined for environment '{}'.", args.env);
        return Ok(());
    }

    let yaml = serde_yaml::to_string(&records).map_err(|e| {
        KprofileError::ParseError(format!("failed to render clusters as YAML: {}", e))
    })?;
    print!("{}", yaml);

    Ok(())
}

/// Load an environment profile layered over the shared `common` profile.
pub(crate) fn load_environment(ctx: &ConfigContext, env: &str) -> Result<Profile> {
    let env_path = ctx.profile_path(env);
    if !env_path.is_file() {
        return Err(KprofileError::UserError(format!(
            "environment '{}' not found (expected '{}').\n\n\
             Use `kprofile environments` to list the available environments.",
            env,
            env_path.display()
        )));
    }

    let common_path = ctx.common_path();
    let common = if common_path.is_file() && common_path != env_path {
        Profile::load(&common_path)?
    } else {
        Profile::default()
    };

    Ok(Profile::layered(common, Profile::load(&env_path)?))
}
