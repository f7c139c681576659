//! Per-problem unit of execution.
//!
//! A worker loads its problem's input, runs one strategy, and pushes every
//! candidate through the score store. Whatever goes wrong in between (I/O,
//! strategy errors, corrupt records, panics) is caught here, logged, and
//! turned into a failed [`TaskReport`]; "End" is always the last line.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use keepbest_core::{CancellationToken, RunOptions, Strategy, WorkerKind};
use keepbest_store::ScoreStore;

use crate::interfaces::{TaskLog, TaskReport};

/// Everything a worker shares with the rest of the run.
pub struct WorkerContext<St: Strategy> {
    pub strategy: Arc<St>,
    pub store: Arc<ScoreStore>,
    pub log: Arc<dyn TaskLog>,
    pub cancel: CancellationToken,
    pub options: RunOptions,
    pub input_dir: PathBuf,
}

/// One logical task: a problem solved by one strategy.
pub struct Worker<St: Strategy> {
    ctx: Arc<WorkerContext<St>>,
    problem: String,
    kind: WorkerKind,
}

impl<St: Strategy> Worker<St> {
    #[must_use]
    pub fn new(ctx: Arc<WorkerContext<St>>, problem: impl Into<String>, kind: WorkerKind) -> Self {
        Self {
            ctx,
            problem: problem.into(),
            kind,
        }
    }

    /// Run to completion. Never panics and never returns an error.
    pub fn run(self) -> TaskReport {
        let mut report = TaskReport::new(&self.problem, self.kind);

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.execute(&mut report)));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                self.log(&format!("{err:?}"));
                report.failure = Some(format!("{err:#}"));
            }
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                self.log(&format!("panicked: {msg}"));
                report.failure = Some(format!("panicked: {msg}"));
            }
        }

        self.log("End");
        info!(
            problem = %self.problem,
            kind = %self.kind,
            iterations = report.iterations,
            saves = report.saves,
            ok = report.succeeded(),
            "worker finished"
        );
        report
    }

    fn execute(&self, report: &mut TaskReport) -> anyhow::Result<()> {
        match self.kind {
            WorkerKind::Simple => self.run_simple(report),
            WorkerKind::BruteForce => self.run_brute_force(report),
        }
    }

    fn run_simple(&self, report: &mut TaskReport) -> anyhow::Result<()> {
        self.log("Start new simple solution");
        let input = self.load()?;
        let solution = self
            .ctx
            .strategy
            .simple_solve(&input)
            .with_context(|| {
                format!("{} simple solve of {}", self.ctx.strategy.name(), self.problem)
            })?;
        report.iterations = 1;
        self.save(&solution, self.ctx.options.force_first_save, report)
    }

    fn run_brute_force(&self, report: &mut TaskReport) -> anyhow::Result<()> {
        self.log("Start new brute force solution");
        let input = self.load()?;
        let limit = self.ctx.options.iteration_limit();

        let mut iteration = 0u64;
        while iteration < limit {
            if self.ctx.cancel.is_cancelled() {
                debug!(problem = %self.problem, iteration, "cancellation observed");
                break;
            }
            let solution = self
                .ctx
                .strategy
                .brute_force_solve(&input, iteration)
                .with_context(|| {
                    format!(
                        "{} brute force iteration {iteration} of {}",
                        self.ctx.strategy.name(),
                        self.problem
                    )
                })?;
            report.iterations += 1;
            self.save(&solution, false, report)?;
            iteration += 1;
        }

        self.log(&format!("Stopped after {} iterations", report.iterations));
        Ok(())
    }

    fn load(&self) -> anyhow::Result<St::Input> {
        let path = self.ctx.input_dir.join(&self.problem);
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading input {}", path.display()))?;
        let input = self
            .ctx
            .strategy
            .parse_input(&raw)
            .with_context(|| format!("parsing input {}", self.problem))?;
        self.log(&format!("Read all data from {}", self.problem));
        Ok(input)
    }

    fn save(
        &self,
        solution: &St::Solution,
        force: bool,
        report: &mut TaskReport,
    ) -> anyhow::Result<()> {
        let outcome = self
            .ctx
            .store
            .save_if_better(&self.problem, solution, force)
            .with_context(|| format!("saving solution for {}", self.problem))?;
        for line in outcome.messages() {
            self.log(&line);
        }
        if outcome.written {
            report.saves += 1;
            report.last_saved = Some(outcome.score.to_string());
        }
        Ok(())
    }

    fn log(&self, message: &str) {
        self.ctx.log.log(&self.problem, message);
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
