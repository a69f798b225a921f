//! kprofile: bootstrap and inspect named Kafka environment profiles.
//!
//! This is the main entry point for the `kprofile` CLI. It parses arguments,
//! installs logging, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod materialize;
pub mod profile;
pub mod source;
pub mod telemetry;
pub mod views;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    telemetry::init_tracing(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
