//! keepbest library: application wiring for the solver harness binary.

pub mod app;
pub mod config;
pub mod errors;
