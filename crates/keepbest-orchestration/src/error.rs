//! Orchestrator error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("cannot read input directory {}: {source}", path.display())]
    InputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn worker for {problem}: {source}")]
    Spawn {
        problem: String,
        #[source]
        source: io::Error,
    },
}
