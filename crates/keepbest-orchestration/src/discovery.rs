//! Problem discovery.

use std::path::Path;

use tracing::{debug, warn};

use keepbest_core::HIDDEN_MARKER;

use crate::error::OrchestratorError;

/// List the problems found in `input_dir`, sorted by name.
///
/// Only regular files count; names starting with [`HIDDEN_MARKER`] and names
/// that are not valid UTF-8 are skipped.
pub fn discover(input_dir: &Path) -> Result<Vec<String>, OrchestratorError> {
    let entries = std::fs::read_dir(input_dir).map_err(|source| OrchestratorError::InputDir {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| OrchestratorError::InputDir {
            path: input_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %path.display(), "skipping input with non UTF-8 name");
            continue;
        };
        if name.starts_with(HIDDEN_MARKER) {
            debug!(name = %name, "skipping hidden input");
            continue;
        }
        names.push(name);
    }

    names.sort();
    debug!(count = names.len(), dir = %input_dir.display(), "discovered problems");
    Ok(names)
}
