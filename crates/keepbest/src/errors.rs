//! Error handling and exit codes.

use std::process::ExitCode;

use keepbest_core::exit_codes;
use keepbest_orchestration::{OrchestratorError, RunReport, ShutdownReason};
use keepbest_store::StoreError;

/// Errors that abort a run before or while workers are dispatched.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The score or output directory could not be prepared.
    #[error("cannot open score store: {0}")]
    Store(#[from] StoreError),

    /// Discovery or worker dispatch failed.
    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),

    /// The Ctrl+C handler could not be installed.
    #[error("cannot install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),

    /// The operator input reader could not be started.
    #[error("cannot start control reader: {0}")]
    Control(#[source] std::io::Error),
}

/// Exit code for an error that aborted the run.
#[must_use]
pub fn handle_error(err: &AppError) -> i32 {
    match err {
        AppError::Store(_) | AppError::Orchestrator(OrchestratorError::InputDir { .. }) => {
            exit_codes::ERROR_CONFIG
        }
        AppError::Orchestrator(OrchestratorError::Spawn { .. })
        | AppError::Signal(_)
        | AppError::Control(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for a completed run.
#[must_use]
pub fn report_exit_code(report: &RunReport) -> i32 {
    if report.reason == ShutdownReason::Interrupted {
        exit_codes::ERROR_CANCELED
    } else if report.failed() > 0 {
        exit_codes::ERROR_TASKS_FAILED
    } else {
        exit_codes::SUCCESS
    }
}

/// Convert a numeric exit code for the process. Codes outside `0..=255`
/// become [`exit_codes::ERROR_GENERIC`].
#[must_use]
pub fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code)
        .or_else(|_| u8::try_from(exit_codes::ERROR_GENERIC))
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
