//! Filesystem utilities for kprofile.
//!
//! Atomic writes for synthesized profiles and byte-exact copies for
//! materialized ones.

pub mod atomic;
mod copy;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
pub use copy::{copy_file, copy_new_file, is_same_path, remove_dir_all_if_exists};
