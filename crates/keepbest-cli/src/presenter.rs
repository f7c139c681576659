//! End-of-run summary.

use console::style;

use keepbest_orchestration::{RunReport, ShutdownReason, TaskReport};

use crate::output::{format_count, format_duration, truncate};
use crate::ui::{print_header, print_warning};

/// Presents the run summary once every worker has been joined.
pub struct SummaryPresenter {
    quiet: bool,
    colors: bool,
}

impl SummaryPresenter {
    #[must_use]
    pub fn new(quiet: bool, colors: bool) -> Self {
        Self { quiet, colors }
    }

    /// Print the summary table to stdout.
    pub fn present(&self, report: &RunReport) {
        if self.quiet {
            return;
        }
        print_header("Run summary", self.colors);
        for line in self.render(report) {
            println!("{line}");
        }
        let failed = report.failed();
        if failed > 0 {
            print_warning(&format!("{failed} task(s) failed"), self.colors);
        }
    }

    /// Summary lines, one per task plus a header and a footer.
    #[must_use]
    pub fn render(&self, report: &RunReport) -> Vec<String> {
        let mut lines = Vec::with_capacity(report.tasks.len() + 2);
        lines.push(format!(
            "  {:<24} {:<12} {:>12} {:>6} {:>14}  {}",
            "problem", "strategy", "iterations", "saves", "last saved", "status"
        ));
        for task in &report.tasks {
            let mut line = format!(
                "  {:<24} {:<12} {:>12} {:>6} {:>14}  {}",
                truncate(&task.problem, 24),
                task.kind.to_string(),
                format_count(task.iterations),
                task.saves,
                task.last_saved.as_deref().unwrap_or("-"),
                self.status(task),
            );
            if let Some(failure) = &task.failure {
                line.push_str(&format!(" ({})", truncate(failure, 60)));
            }
            lines.push(line);
        }
        lines.push(format!(
            "  {} task(s), stopped by {} after {}",
            report.tasks.len(),
            describe_reason(report.reason),
            format_duration(report.elapsed)
        ));
        lines
    }

    /// Status word for one task, colored when enabled.
    fn status(&self, task: &TaskReport) -> String {
        let word = if task.succeeded() { "ok" } else { "FAILED" };
        let styled = if task.succeeded() {
            style(word).green()
        } else {
            style(word).red().bold()
        };
        styled.force_styling(self.colors).to_string()
    }
}

/// Human-readable reason line.
#[must_use]
pub fn describe_reason(reason: ShutdownReason) -> &'static str {
    match reason {
        ShutdownReason::Quit => "quit command",
        ShutdownReason::EndOfInput => "end of operator input",
        ShutdownReason::Interrupted => "interrupted",
        ShutdownReason::Deadline => "deadline reached",
        ShutdownReason::AllDone => "all tasks finished",
    }
}
