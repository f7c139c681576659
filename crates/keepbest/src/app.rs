//! Application entry point and dispatch.

use std::io::BufReader;
use std::sync::Arc;

use crossbeam_channel::Sender;
use tracing::info;

use keepbest_cli::completion::generate_completion;
use keepbest_cli::ui::{colors_wanted, print_error};
use keepbest_cli::{SummaryPresenter, TaskLogger, PALETTE};
use keepbest_core::knapsack::KnapsackStrategy;
use keepbest_orchestration::control::spawn_line_reader;
use keepbest_orchestration::{ControlEvent, Orchestrator, OrchestratorConfig};
use keepbest_store::ScoreStore;

use crate::config::AppConfig;
use crate::errors::{handle_error, report_exit_code, AppError};

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> i32 {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return keepbest_core::exit_codes::SUCCESS;
    }

    let colors = colors_wanted(config.no_color);
    match run_harness(config, colors) {
        Ok(code) => code,
        Err(err) => {
            print_error(&err.to_string(), colors);
            handle_error(&err)
        }
    }
}

fn run_harness(config: &AppConfig, colors: bool) -> Result<i32, AppError> {
    let store = ScoreStore::open(&config.scores, &config.outputs)?;
    let orchestrator = Orchestrator::new(
        OrchestratorConfig {
            input_dir: config.inputs.clone(),
            options: config.run_options(),
        },
        KnapsackStrategy::new(),
        store,
    );

    let plan = orchestrator.prepare(PALETTE.len())?;
    info!(problems = plan.problems.len(), "problems discovered");
    let logger = Arc::new(TaskLogger::stdout(Arc::clone(&plan.identities), colors));

    let (control_tx, control_rx) = crossbeam_channel::unbounded();
    install_interrupt_handler(control_tx.clone())?;
    spawn_line_reader(BufReader::new(std::io::stdin()), control_tx).map_err(AppError::Control)?;

    let report = orchestrator.run(&plan, logger, &control_rx)?;
    SummaryPresenter::new(config.quiet, colors).present(&report);
    Ok(report_exit_code(&report))
}

fn install_interrupt_handler(tx: Sender<ControlEvent>) -> Result<(), AppError> {
    ctrlc::set_handler(move || {
        let _ = tx.send(ControlEvent::Interrupt);
    })?;
    Ok(())
}
