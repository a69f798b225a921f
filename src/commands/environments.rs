//! Implementation of the `kprofile environments` command.

use crate::context::ConfigContext;
use crate::error::Result;
use crate::views::list_environments;

/// Print one environment name per line.
pub fn cmd_environments(ctx: &ConfigContext) -> Result<()> {
    let names = list_environments(&ctx.config_dir)?;

    if names.is_empty() {
        println!(
            "No environments in {}. Run `kprofile init` to create one.",
            ctx.config_dir.display()
        );
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
