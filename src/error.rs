//! Error types for the kprofile CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for kprofile operations.
///
/// Every variant is terminal: nothing is retried and files copied before the
/// failure are left in place.
#[derive(Error, Debug)]
pub enum KprofileError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// The configured source could not be turned into a readable directory.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// The resolved source directory could not be enumerated.
    #[error("cannot list source directory '{}': {source}", .path.display())]
    SourceNotListable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A profile file is already present and overwriting was not requested.
    #[error(
        "destination file '{}' already exists (re-run with --overwrite to replace it)",
        .0.display()
    )]
    DestinationExists(PathBuf),

    /// Create/delete/copy failure on the config directory.
    #[error("{0}")]
    IoError(String),

    /// A profile file could not be parsed or serialized.
    #[error("{0}")]
    ParseError(String),
}

impl KprofileError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            KprofileError::UserError(_) => exit_codes::USER_ERROR,
            KprofileError::SourceUnavailable(_) => exit_codes::SOURCE_FAILURE,
            KprofileError::SourceNotListable { .. } => exit_codes::SOURCE_FAILURE,
            KprofileError::DestinationExists(_) => exit_codes::DESTINATION_CONFLICT,
            KprofileError::IoError(_) => exit_codes::USER_ERROR,
            KprofileError::ParseError(_) => exit_codes::PARSE_FAILURE,
        }
    }
}

/// Result type alias for kprofile operations.
pub type Result<T> = std::result::Result<T, KprofileError>;
