//! Core orchestration: dispatch one worker per problem, wait for the
//! operator, then cancel and join everything.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{select, Receiver};
use tracing::{debug, info, warn};

use keepbest_core::{CancellationToken, RunOptions, Strategy, WorkerKind};
use keepbest_store::ScoreStore;

use crate::control::{parse_command, Command, ControlEvent};
use crate::discovery::discover;
use crate::error::OrchestratorError;
use crate::identity::IdentityTable;
use crate::interfaces::{TaskLog, TaskReport};
use crate::worker::{panic_message, Worker, WorkerContext};

/// Orchestrator configuration.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Directory holding one input file per problem.
    pub input_dir: PathBuf,
    /// Run options.
    pub options: RunOptions,
}

/// Problems of one run with their identities, fixed before any worker starts.
#[derive(Debug, Clone)]
pub struct Plan {
    pub problems: Vec<String>,
    pub identities: Arc<IdentityTable>,
}

/// Why the control loop stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// The operator typed a quit command.
    Quit,
    /// The control stream ended or was disconnected.
    EndOfInput,
    /// Ctrl+C.
    Interrupted,
    /// The configured deadline passed.
    Deadline,
    /// Every worker exited and the run was configured to stop then.
    AllDone,
}

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub reason: ShutdownReason,
    pub tasks: Vec<TaskReport>,
    pub elapsed: Duration,
}

impl RunReport {
    /// Number of tasks that ended with an error.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.tasks.iter().filter(|t| !t.succeeded()).count()
    }
}

/// Runs one worker per problem on its own thread.
pub struct Orchestrator<St: Strategy> {
    config: OrchestratorConfig,
    strategy: Arc<St>,
    store: Arc<ScoreStore>,
    cancel: CancellationToken,
}

impl<St: Strategy> Orchestrator<St> {
    #[must_use]
    pub fn new(config: OrchestratorConfig, strategy: St, store: ScoreStore) -> Self {
        Self {
            config,
            strategy: Arc::new(strategy),
            store: Arc::new(store),
            cancel: CancellationToken::new(),
        }
    }

    /// The token cancelled at shutdown.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Shared score store.
    #[must_use]
    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    /// Discover problems and assign identities from a palette of `palette_len`.
    pub fn prepare(&self, palette_len: usize) -> Result<Plan, OrchestratorError> {
        let problems = discover(&self.config.input_dir)?;
        let identities = Arc::new(IdentityTable::assign(&problems, palette_len));
        Ok(Plan {
            problems,
            identities,
        })
    }

    /// Start every worker, wait for a shutdown trigger on `control`, then
    /// cancel and join all workers.
    ///
    /// Returns only after every spawned worker has exited.
    pub fn run(
        &self,
        plan: &Plan,
        log: Arc<dyn TaskLog>,
        control: &Receiver<ControlEvent>,
    ) -> Result<RunReport, OrchestratorError> {
        let start = Instant::now();
        let ctx = Arc::new(WorkerContext {
            strategy: Arc::clone(&self.strategy),
            store: Arc::clone(&self.store),
            log,
            cancel: self.cancel.clone(),
            options: self.config.options.clone(),
            input_dir: self.config.input_dir.clone(),
        });

        let (done_tx, done_rx) = crossbeam_channel::unbounded::<()>();
        let mut handles: Vec<(String, WorkerKind, JoinHandle<TaskReport>)> = Vec::new();

        for problem in &plan.problems {
            for &kind in self.config.options.mode.worker_kinds() {
                let worker = Worker::new(Arc::clone(&ctx), problem.clone(), kind);
                let done_tx = done_tx.clone();
                let spawned = std::thread::Builder::new()
                    .name(format!("{kind}:{problem}"))
                    .spawn(move || {
                        let report = worker.run();
                        let _ = done_tx.send(());
                        report
                    });
                match spawned {
                    Ok(handle) => handles.push((problem.clone(), kind, handle)),
                    Err(source) => {
                        self.cancel.cancel();
                        let _ = Self::join_all(handles);
                        return Err(OrchestratorError::Spawn {
                            problem: problem.clone(),
                            source,
                        });
                    }
                }
            }
        }
        drop(done_tx);

        info!(workers = handles.len(), problems = plan.problems.len(), "workers started");
        if handles.is_empty() {
            warn!(dir = %self.config.input_dir.display(), "no problems to solve");
        }

        let reason = self.wait_for_shutdown(control, &done_rx, handles.len());
        info!(?reason, "shutting down");
        self.cancel.cancel();

        let tasks = Self::join_all(handles);
        Ok(RunReport {
            reason,
            tasks,
            elapsed: start.elapsed(),
        })
    }

    fn wait_for_shutdown(
        &self,
        control: &Receiver<ControlEvent>,
        done_rx: &Receiver<()>,
        total: usize,
    ) -> ShutdownReason {
        let options = &self.config.options;
        let deadline = options
            .deadline
            .map_or_else(crossbeam_channel::never, |d| crossbeam_channel::at(Instant::now() + d));
        let idle = crossbeam_channel::never::<()>();
        let closed = crossbeam_channel::never::<ControlEvent>();
        let mut control_open = true;
        let mut finished = 0usize;

        loop {
            if options.exit_when_done && finished >= total {
                return ShutdownReason::AllDone;
            }
            // Once every worker reported, stop polling the closed done channel.
            let done = if finished < total { done_rx } else { &idle };
            let events = if control_open { control } else { &closed };

            select! {
                recv(events) -> event => match event {
                    Ok(ControlEvent::Line(line)) => match parse_command(&line) {
                        Command::Quit => return ShutdownReason::Quit,
                        Command::Ignore => debug!(line = %line, "ignoring control line"),
                    },
                    // Batch runs keep waiting for their workers.
                    Ok(ControlEvent::EndOfInput) | Err(_) if options.exit_when_done => {
                        debug!("control stream ended, waiting for workers");
                        control_open = false;
                    }
                    Ok(ControlEvent::EndOfInput) | Err(_) => return ShutdownReason::EndOfInput,
                    Ok(ControlEvent::Interrupt) => return ShutdownReason::Interrupted,
                },
                recv(done) -> _ => {
                    finished += 1;
                    debug!(finished, total, "worker exited");
                },
                recv(deadline) -> _ => return ShutdownReason::Deadline,
            }
        }
    }

    fn join_all(handles: Vec<(String, WorkerKind, JoinHandle<TaskReport>)>) -> Vec<TaskReport> {
        handles
            .into_iter()
            .map(|(problem, kind, handle)| {
                handle.join().unwrap_or_else(|payload| {
                    let msg = panic_message(payload.as_ref());
                    warn!(problem = %problem, "worker thread panicked: {msg}");
                    let mut report = TaskReport::new(&problem, kind);
                    report.failure = Some(format!("panicked: {msg}"));
                    report
                })
            })
            .collect()
    }
}
