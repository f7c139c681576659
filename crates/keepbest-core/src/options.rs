//! Run options.

use std::fmt;
use std::time::Duration;

/// Which solving strategies are dispatched for each problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveMode {
    /// One-shot solve, run once per problem.
    #[default]
    Simple,
    /// Iterative search until cancelled.
    BruteForce,
    /// One simple and one brute-force worker per problem.
    Both,
}

impl SolveMode {
    /// Worker kinds spawned for each problem under this mode.
    #[must_use]
    pub fn worker_kinds(self) -> &'static [WorkerKind] {
        match self {
            Self::Simple => &[WorkerKind::Simple],
            Self::BruteForce => &[WorkerKind::BruteForce],
            Self::Both => &[WorkerKind::Simple, WorkerKind::BruteForce],
        }
    }
}

/// The strategy a single worker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerKind {
    Simple,
    BruteForce,
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple"),
            Self::BruteForce => f.write_str("brute force"),
        }
    }
}

/// Options for one orchestrator run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Strategies dispatched per problem.
    pub mode: SolveMode,
    /// Whether the simple worker writes its result regardless of score.
    pub force_first_save: bool,
    /// Upper bound on brute-force iterations (None = until cancelled).
    pub max_iterations: Option<u64>,
    /// Return as soon as every worker has exited.
    pub exit_when_done: bool,
    /// Cancel the run after this much wall-clock time.
    pub deadline: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mode: SolveMode::Simple,
            force_first_save: true,
            max_iterations: None,
            exit_when_done: false,
            deadline: None,
        }
    }
}

impl RunOptions {
    /// Normalize options: zero budgets mean "no limit".
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_iterations == Some(0) {
            self.max_iterations = None;
        }
        if self.deadline == Some(Duration::ZERO) {
            self.deadline = None;
        }
        self
    }

    /// Iteration bound for brute-force workers.
    #[must_use]
    pub fn iteration_limit(&self) -> u64 {
        self.max_iterations.unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = RunOptions::default();
        assert_eq!(opts.mode, SolveMode::Simple);
        assert!(opts.force_first_save);
        assert!(!opts.exit_when_done);
        assert_eq!(opts.iteration_limit(), u64::MAX);
    }

    #[test]
    fn normalize_zero_budgets() {
        let opts = RunOptions {
            max_iterations: Some(0),
            deadline: Some(Duration::ZERO),
            ..Default::default()
        }
        .normalize();
        assert_eq!(opts.max_iterations, None);
        assert_eq!(opts.deadline, None);
    }

    #[test]
    fn worker_kinds_per_mode() {
        assert_eq!(SolveMode::Simple.worker_kinds(), &[WorkerKind::Simple]);
        assert_eq!(SolveMode::BruteForce.worker_kinds(), &[WorkerKind::BruteForce]);
        assert_eq!(SolveMode::Both.worker_kinds().len(), 2);
    }

    #[test]
    fn worker_kind_display() {
        assert_eq!(WorkerKind::Simple.to_string(), "simple");
        assert_eq!(WorkerKind::BruteForce.to_string(), "brute force");
    }
}
