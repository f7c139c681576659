//! Test doubles shared by the unit tests of this crate.

use parking_lot::Mutex;

use keepbest_core::{Solution, SolveError, Strategy};

use crate::interfaces::TaskLog;

/// Task log that records every line in arrival order.
#[derive(Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<(String, String)>>,
}

impl MemoryLog {
    /// All `(problem, message)` pairs seen so far.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.lines.lock().clone()
    }

    /// Messages logged for one problem.
    pub fn lines_for(&self, problem: &str) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(p, _)| p == problem)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl TaskLog for MemoryLog {
    fn log(&self, problem: &str, message: &str) {
        self.lines
            .lock()
            .push((problem.to_string(), message.to_string()));
    }
}

/// What the scripted input asks the strategy to do.
pub enum Script {
    Score(i64),
    Fail,
    Panic,
}

/// Strategy driven by the input text: a number is the base score,
/// `fail` returns an error, `panic` panics.
#[derive(Default)]
pub struct ScriptedStrategy;

pub struct Scored(pub i64);

impl Solution for Scored {
    type Score = i64;

    fn score(&self) -> i64 {
        self.0
    }

    fn to_text(&self) -> String {
        format!("scored {}", self.0)
    }
}

impl ScriptedStrategy {
    fn run(input: &Script, bonus: u64) -> Result<Scored, SolveError> {
        match input {
            Script::Score(base) => Ok(Scored(
                base.saturating_add(i64::try_from(bonus).unwrap_or(i64::MAX)),
            )),
            Script::Fail => Err(SolveError::Failed("scripted failure".into())),
            Script::Panic => panic!("scripted panic"),
        }
    }
}

impl Strategy for ScriptedStrategy {
    type Input = Script;
    type Solution = Scored;

    fn name(&self) -> &str {
        "scripted"
    }

    fn parse_input(&self, raw: &str) -> Result<Script, SolveError> {
        match raw.trim() {
            "fail" => Ok(Script::Fail),
            "panic" => Ok(Script::Panic),
            other => other
                .parse()
                .map(Script::Score)
                .map_err(|e| SolveError::InvalidInput(format!("{other:?}: {e}"))),
        }
    }

    fn simple_solve(&self, input: &Script) -> Result<Scored, SolveError> {
        Self::run(input, 0)
    }

    fn brute_force_solve(&self, input: &Script, iteration: u64) -> Result<Scored, SolveError> {
        Self::run(input, iteration)
    }
}
