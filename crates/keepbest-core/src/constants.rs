//! Constants shared across the harness.

/// Input files whose name starts with this character are never dispatched.
pub const HIDDEN_MARKER: char = '.';

/// Operator commands that start a graceful shutdown.
pub const QUIT_COMMANDS: [&str; 2] = ["quit", "q"];

/// Number of leading characters of a problem name shown in log tags.
pub const TAG_LEN: usize = 2;

/// Exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// At least one problem's task failed.
    pub const ERROR_TASKS_FAILED: i32 = 5;
    /// Run interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
