//! Process exit codes for the setup entry point

/// Successful termination (help, version, completions)
pub const OK: i32 = 0;

/// Any setup failure, including usage errors
pub const FAILURE: i32 = 1;
