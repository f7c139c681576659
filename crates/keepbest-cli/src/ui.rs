//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Decide whether the status stream is colored.
#[must_use]
pub fn colors_wanted(no_color_flag: bool) -> bool {
    !no_color_flag && !is_color_disabled() && console::colors_enabled()
}

/// Print a styled header.
pub fn print_header(text: &str, colors: bool) {
    println!("{}", style(format!("== {text} ==")).bold().force_styling(colors));
}

/// Print a warning to stderr.
pub fn print_warning(text: &str, colors: bool) {
    eprintln!(
        "{} {text}",
        style("[WARN]").yellow().bold().force_styling(colors)
    );
}

/// Print an error message to stderr.
pub fn print_error(text: &str, colors: bool) {
    eprintln!(
        "{} {text}",
        style("[ERROR]").red().bold().force_styling(colors)
    );
}
