//! Stable exit codes for `detsex` commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid arguments, unreadable config or history, or any other error.
pub const INVALID: i32 = 1;
/// A history id given on the command line does not exist.
pub const NOT_FOUND: i32 = 2;
