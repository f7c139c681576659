//! Orchestration interfaces.

use keepbest_core::WorkerKind;

/// Sink for per-problem status lines shared by every worker.
///
/// Implementations must write each call as one whole line; concurrent
/// callers may interleave lines but never parts of lines.
pub trait TaskLog: Send + Sync {
    /// Write one status line for `problem`.
    fn log(&self, problem: &str, message: &str);
}

/// Summary of one worker's run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    /// Problem name.
    pub problem: String,
    /// Strategy the worker ran.
    pub kind: WorkerKind,
    /// Number of solutions produced.
    pub iterations: u64,
    /// Number of solutions that were persisted.
    pub saves: u64,
    /// Last persisted score, in its record form.
    pub last_saved: Option<String>,
    /// Error chain, if the task failed.
    pub failure: Option<String>,
}

impl TaskReport {
    #[must_use]
    pub fn new(problem: &str, kind: WorkerKind) -> Self {
        Self {
            problem: problem.to_string(),
            kind,
            iterations: 0,
            saves: 0,
            last_saved: None,
            failure: None,
        }
    }

    /// Whether the task reached its end without error.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}
