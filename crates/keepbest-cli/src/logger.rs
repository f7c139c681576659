//! Colored, line-atomic status stream shared by all workers.

use std::io::{self, Write};
use std::sync::Arc;

use console::{style, Color};
use parking_lot::Mutex;
use tracing::{error, warn};

use keepbest_orchestration::identity::short_tag;
use keepbest_orchestration::{IdentityTable, TaskLog};

/// Tag colors, cycled by identity slot.
pub const PALETTE: [Color; 7] = [
    Color::Green,
    Color::Red,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Blue,
    // dark yellow
    Color::Color256(136),
];

/// Writes `[tg]\tmessage` lines to a shared sink.
///
/// The whole line is formatted first and written and flushed under a single
/// lock, so lines from concurrent workers never mix.
pub struct TaskLogger<W: Write + Send> {
    sink: Mutex<W>,
    identities: Arc<IdentityTable>,
    colors: bool,
}

impl TaskLogger<io::Stdout> {
    /// Logger writing to standard output.
    #[must_use]
    pub fn stdout(identities: Arc<IdentityTable>, colors: bool) -> Self {
        Self::new(io::stdout(), identities, colors)
    }
}

impl<W: Write + Send> TaskLogger<W> {
    #[must_use]
    pub fn new(sink: W, identities: Arc<IdentityTable>, colors: bool) -> Self {
        Self {
            sink: Mutex::new(sink),
            identities,
            colors,
        }
    }

    /// Consume the logger and return its sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn prefix(&self, problem: &str) -> String {
        let Some(identity) = self.identities.get(problem) else {
            warn!(problem, "log line for a problem without identity");
            return format!("[{}]", short_tag(problem));
        };
        let color = PALETTE[identity.slot % PALETTE.len()];
        style(format!("[{}]", identity.tag))
            .fg(color)
            .force_styling(self.colors)
            .to_string()
    }
}

impl<W: Write + Send> TaskLog for TaskLogger<W> {
    fn log(&self, problem: &str, message: &str) {
        let line = format!("{}\t{message}\n", self.prefix(problem));
        let mut sink = self.sink.lock();
        if let Err(e) = sink.write_all(line.as_bytes()).and_then(|()| sink.flush()) {
            error!(problem, error = %e, "failed to write status line");
        }
    }
}
