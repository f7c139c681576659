//! # keepbest-core
//!
//! Core contracts for the keepbest harness: what a solving strategy looks
//! like, how its solutions are scored, and how running workers are told to
//! wind down.

pub mod cancel;
pub mod constants;
pub mod knapsack;
pub mod options;
pub mod strategy;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{exit_codes, HIDDEN_MARKER, QUIT_COMMANDS};
pub use options::{RunOptions, SolveMode, WorkerKind};
pub use strategy::{Score, Solution, SolveError, Strategy};
