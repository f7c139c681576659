//! # keepbest-orchestration
//!
//! Problem discovery, identity assignment, per-problem workers, and the run
//! loop that waits for an operator command before joining every worker.

pub mod control;
pub mod discovery;
pub mod error;
pub mod identity;
pub mod interfaces;
pub mod orchestrator;
pub mod worker;

pub use control::{parse_command, Command, ControlEvent};
pub use error::OrchestratorError;
pub use identity::{Identity, IdentityTable};
pub use interfaces::{TaskLog, TaskReport};
pub use orchestrator::{Orchestrator, OrchestratorConfig, Plan, RunReport, ShutdownReason};

#[cfg(test)]
pub(crate) mod test_support;
