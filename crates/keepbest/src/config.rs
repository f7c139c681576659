//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use keepbest_core::{RunOptions, SolveMode};

/// Strategies to run per problem.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeArg {
    /// One deterministic attempt per problem.
    #[default]
    Simple,
    /// Randomized attempts until cancelled.
    BruteForce,
    /// Both strategies racing on the same records.
    Both,
}

impl From<ModeArg> for SolveMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => Self::Simple,
            ModeArg::BruteForce => Self::BruteForce,
            ModeArg::Both => Self::Both,
        }
    }
}

/// keepbest: run a solver over every problem and keep the best score.
#[derive(Parser, Debug)]
#[command(name = "keepbest", version, about)]
pub struct AppConfig {
    /// Directory with one input file per problem.
    #[arg(long, default_value = "inputs", env = "KEEPBEST_INPUTS")]
    pub inputs: PathBuf,

    /// Directory receiving the best solution per problem.
    #[arg(long, default_value = "outputs", env = "KEEPBEST_OUTPUTS")]
    pub outputs: PathBuf,

    /// Directory receiving the best score per problem.
    #[arg(long, default_value = "scores", env = "KEEPBEST_SCORES")]
    pub scores: PathBuf,

    /// Strategies to run per problem.
    #[arg(long, value_enum, default_value_t = ModeArg::Simple)]
    pub mode: ModeArg,

    /// Stop brute-force workers after this many attempts (0 = unlimited).
    #[arg(long, default_value = "0")]
    pub max_iterations: u64,

    /// Only save simple results that beat the recorded score.
    #[arg(long)]
    pub no_force_first_save: bool,

    /// Exit once every worker has finished instead of waiting for `quit`.
    #[arg(long)]
    pub exit_when_done: bool,

    /// Stop the run after this long (e.g. "30s", "5m", "1h", "500ms").
    #[arg(long, value_parser = parse_duration)]
    pub deadline: Option<Duration>,

    /// Disable colored tags.
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the run summary.
    #[arg(short, long)]
    pub quiet: bool,

    /// Diagnostic verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Run options derived from the flags.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            mode: self.mode.into(),
            force_first_save: !self.no_force_first_save,
            max_iterations: Some(self.max_iterations),
            exit_when_done: self.exit_when_done,
            deadline: self.deadline,
        }
        .normalize()
    }

    /// Default `tracing` level for the chosen verbosity.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms" or bare seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (digits, unit_secs, millis) = if let Some(ms) = s.strip_suffix("ms") {
        (ms, 0, true)
    } else if let Some(m) = s.strip_suffix('m') {
        (m, 60, false)
    } else if let Some(h) = s.strip_suffix('h') {
        (h, 3600, false)
    } else if let Some(secs) = s.strip_suffix('s') {
        (secs, 1, false)
    } else {
        (s, 1, false)
    };
    let n: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration {s:?} (expected e.g. 30s, 5m, 1h, 500ms)"))?;
    if millis {
        Ok(Duration::from_millis(n))
    } else {
        n.checked_mul(unit_secs)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration {s:?} is too large"))
    }
}
