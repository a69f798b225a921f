//! Exit code constants for the kprofile CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, I/O failure on the config directory)
//! - 2: Source failure (local path missing, clone failed, source not listable)
//! - 3: Destination conflict (profile file exists and `--overwrite` was not given)
//! - 4: Profile parse failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid state, or filesystem failure.
pub const USER_ERROR: i32 = 1;

/// Source failure: the configured source could not be resolved or listed.
pub const SOURCE_FAILURE: i32 = 2;

/// Destination conflict: a profile file already exists in the config directory.
pub const DESTINATION_CONFLICT: i32 = 3;

/// A profile file could not be parsed or serialized.
pub const PARSE_FAILURE: i32 = 4;
