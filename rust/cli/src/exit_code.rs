//! Process exit codes returned by [`crate::run`].

/// Command finished normally.
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, I/O failure or engine error.
pub const ERROR: i32 = 2;

/// The player quit before the game ended.
pub const INTERRUPTED: i32 = 130;
