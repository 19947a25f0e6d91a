//! Stable exit codes for `obs-action` commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to missing required inputs, unreadable files or other errors.
pub const INVALID: i32 = 1;
