//! Solver contracts consumed by the orchestration layer.
//!
//! `Strategy` is implemented by a problem class: it parses raw input and
//! produces candidate solutions either once (`simple_solve`) or per
//! iteration (`brute_force_solve`). `Solution` exposes the numeric score and
//! the text artifact that gets persisted. The harness never looks inside
//! either.

use std::fmt::{Debug, Display};

/// Error type for solving strategies.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// The input data could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The strategy failed while producing a solution.
    #[error("solve failed: {0}")]
    Failed(String),
}

/// A comparable quality measure. Higher is strictly better.
pub trait Score: Copy + PartialOrd + Display + Debug + Send + Sync + 'static {
    /// Baseline used when no record exists yet.
    const ZERO: Self;

    /// Parse the decimal text form stored in a score record.
    fn parse_record(text: &str) -> Result<Self, String>;

    /// Whether this value can be persisted and compared. False for NaN and
    /// infinities.
    fn is_valid(self) -> bool {
        true
    }

    /// Difference reported alongside an improvement. Saturates instead of
    /// overflowing.
    #[must_use]
    fn gain(self, previous: Self) -> Self;
}

macro_rules! impl_integer_score {
    ($($t:ty),* $(,)?) => {
        $(
            impl Score for $t {
                const ZERO: Self = 0;

                fn parse_record(text: &str) -> Result<Self, String> {
                    text.trim().parse::<$t>().map_err(|e| e.to_string())
                }

                fn gain(self, previous: Self) -> Self {
                    self.saturating_sub(previous)
                }
            }
        )*
    };
}

macro_rules! impl_float_score {
    ($($t:ty),* $(,)?) => {
        $(
            impl Score for $t {
                const ZERO: Self = 0.0;

                fn parse_record(text: &str) -> Result<Self, String> {
                    let value = text.trim().parse::<$t>().map_err(|e| e.to_string())?;
                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err(format!("non-finite score {value}"))
                    }
                }

                fn is_valid(self) -> bool {
                    self.is_finite()
                }

                fn gain(self, previous: Self) -> Self {
                    self - previous
                }
            }
        )*
    };
}

impl_integer_score!(i32, i64, u32, u64);
impl_float_score!(f32, f64);

/// A candidate produced by one scoring attempt.
pub trait Solution: Send {
    /// Numeric type of this problem class's score.
    type Score: Score;

    /// Score of this solution.
    fn score(&self) -> Self::Score;

    /// Text artifact written to the output directory.
    fn to_text(&self) -> String;
}

/// A solving strategy for one problem class.
pub trait Strategy: Send + Sync + 'static {
    /// Parsed input data, owned by a single worker.
    type Input: Send;

    /// Solutions produced by this strategy.
    type Solution: Solution;

    /// Get the name of this strategy.
    fn name(&self) -> &str;

    /// Interpret the raw contents of one input file.
    fn parse_input(&self, raw: &str) -> Result<Self::Input, SolveError>;

    /// Produce a single solution.
    fn simple_solve(&self, input: &Self::Input) -> Result<Self::Solution, SolveError>;

    /// Produce the candidate for one iteration of an open-ended search.
    fn brute_force_solve(
        &self,
        input: &Self::Input,
        iteration: u64,
    ) -> Result<Self::Solution, SolveError>;
}
