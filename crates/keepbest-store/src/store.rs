//! File-backed score records and output artifacts.
//!
//! Layout: for a problem named `a.txt` the best score lives in
//! `<scores>/a.txt` as decimal text and the matching artifact in
//! `<outputs>/a.txt`. Both are replaced on every save by writing a temporary
//! file in the same directory and renaming it over the old one, so a reader
//! sees either the previous or the new contents, never a partial file.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, trace, warn};

use keepbest_core::{Score, Solution};

use crate::outcome::SaveOutcome;

/// Error type for score store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing a record failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A persisted score could not be parsed.
    #[error("corrupt score record {}: {contents:?} ({reason})", path.display())]
    CorruptScore {
        path: PathBuf,
        contents: String,
        reason: String,
    },

    /// A candidate score cannot be stored or compared (NaN, infinity).
    #[error("refusing to save non-finite score {score} for {problem}")]
    InvalidScore { problem: String, score: String },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Best-score gate shared by every worker of a run.
///
/// Each read-compare-write for a given problem name runs under that name's
/// own mutex, so concurrent attempts on the same problem are totally ordered
/// while different problems never wait on each other.
pub struct ScoreStore {
    scores_dir: PathBuf,
    outputs_dir: PathBuf,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ScoreStore {
    /// Open a store, creating both directories if needed.
    pub fn open(
        scores_dir: impl Into<PathBuf>,
        outputs_dir: impl Into<PathBuf>,
    ) -> Result<Self, StoreError> {
        let scores_dir = scores_dir.into();
        let outputs_dir = outputs_dir.into();
        for dir in [&scores_dir, &outputs_dir] {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }
        debug!(
            scores = %scores_dir.display(),
            outputs = %outputs_dir.display(),
            "score store opened"
        );
        Ok(Self {
            scores_dir,
            outputs_dir,
            locks: Mutex::new(HashMap::new()),
        })
    }

    /// Path of the score record for `problem`.
    #[must_use]
    pub fn score_path(&self, problem: &str) -> PathBuf {
        self.scores_dir.join(problem)
    }

    /// Path of the output artifact for `problem`.
    #[must_use]
    pub fn output_path(&self, problem: &str) -> PathBuf {
        self.outputs_dir.join(problem)
    }

    /// Read the persisted score for `problem`, if any.
    ///
    /// A record that exists but does not parse is an error, never zero.
    pub fn read_score<S: Score>(&self, problem: &str) -> Result<Option<S>, StoreError> {
        let path = self.score_path(problem);
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&path, e)),
        };
        S::parse_record(&contents)
            .map(Some)
            .map_err(|reason| StoreError::CorruptScore {
                path,
                contents,
                reason,
            })
    }

    /// Persist `solution` if it beats the saved score, or unconditionally
    /// when `force` is set.
    pub fn save_if_better<Sol: Solution>(
        &self,
        problem: &str,
        solution: &Sol,
        force: bool,
    ) -> Result<SaveOutcome<Sol::Score>, StoreError> {
        let score = solution.score();
        if !score.is_valid() {
            warn!(problem, %score, "non-finite candidate score");
            return Err(StoreError::InvalidScore {
                problem: problem.to_string(),
                score: score.to_string(),
            });
        }

        let lock = self.lock_for(problem);
        let _guard = lock.lock();

        let previous = self.read_score::<Sol::Score>(problem)?;
        let outcome = SaveOutcome::evaluate(previous, score, force);
        trace!(problem, ?previous, score = %outcome.score, force, "score gate");

        if outcome.written {
            replace_file(&self.outputs_dir, &self.output_path(problem), &solution.to_text())?;
            replace_file(&self.scores_dir, &self.score_path(problem), &score.to_string())?;
            debug!(problem, score = %outcome.score, forced = outcome.forced(), "solution saved");
        }

        Ok(outcome)
    }

    fn lock_for(&self, problem: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        Arc::clone(locks.entry(problem.to_string()).or_default())
    }
}

/// Atomically replace `path` (inside `dir`) with `contents`.
fn replace_file(dir: &Path, path: &Path, contents: &str) -> Result<(), StoreError> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
