//! Operator control channel.

use std::io::BufRead;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use keepbest_core::QUIT_COMMANDS;

/// Event delivered to the orchestrator's control loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// One line typed by the operator.
    Line(String),
    /// The operator's input stream ended.
    EndOfInput,
    /// Interrupt signal (Ctrl+C).
    Interrupt,
}

/// Interpretation of one operator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Ignore,
}

/// Parse an operator line. Surrounding whitespace is ignored.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    if QUIT_COMMANDS.contains(&line.trim()) {
        Command::Quit
    } else {
        Command::Ignore
    }
}

/// Forward lines from `reader` to `tx` on a background thread.
///
/// Sends [`ControlEvent::EndOfInput`] once the stream ends or fails, then
/// exits. The thread also exits when the receiving side is gone.
pub fn spawn_line_reader<R>(reader: R, tx: Sender<ControlEvent>) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("control-reader".into())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(ControlEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "control stream read failed");
                        break;
                    }
                }
            }
            debug!("control stream ended");
            let _ = tx.send(ControlEvent::EndOfInput);
        })
}
