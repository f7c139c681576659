//! Result of one save attempt.

use keepbest_core::Score;

/// What happened when a candidate went through the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveOutcome<S> {
    /// Persisted score before the attempt (None = no record).
    pub previous: Option<S>,
    /// Score of the candidate.
    pub score: S,
    /// Whether the record and output were overwritten.
    pub written: bool,
    /// Whether the candidate strictly beat the baseline.
    pub improved: bool,
}

impl<S: Score> SaveOutcome<S> {
    /// Compare `score` against `previous` (absent = zero).
    #[must_use]
    pub fn evaluate(previous: Option<S>, score: S, force: bool) -> Self {
        let baseline = previous.unwrap_or(S::ZERO);
        let improved = score > baseline;
        Self {
            previous,
            score,
            written: improved || force,
            improved,
        }
    }

    /// Baseline the candidate was compared against.
    #[must_use]
    pub fn baseline(&self) -> S {
        self.previous.unwrap_or(S::ZERO)
    }

    /// True when the write happened only because it was forced.
    #[must_use]
    pub fn forced(&self) -> bool {
        self.written && !self.improved
    }

    /// Status lines describing this outcome, in the order they are logged.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if self.written {
            if self.forced() {
                lines.push(format!(
                    "Saved new solution ({}, forced; best was {})",
                    self.score,
                    self.baseline()
                ));
            } else {
                lines.push(format!("Saved new solution ({})", self.score));
            }
        }
        if self.improved {
            lines.push(format!(
                "Improved score {} (+{})",
                self.score,
                self.score.gain(self.baseline())
            ));
        }
        lines
    }
}
