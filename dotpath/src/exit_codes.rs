//! Stable exit codes for `dotpath` CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, unreadable/unparseable documents,
/// or other errors.
pub const INVALID: i32 = 1;
/// The key could not be resolved against the document.
pub const NOT_FOUND: i32 = 2;
