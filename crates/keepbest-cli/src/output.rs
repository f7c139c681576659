//! CLI output formatting.

use std::time::Duration;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.9995 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 59.95 {
        format!("{secs:.1}s")
    } else {
        // Round before splitting so seconds carry into minutes.
        let total = secs.round() as u64;
        if total < 3600 {
            format!("{}m{:02}s", total / 60, total % 60)
        } else {
            format!("{}h{:02}m", total / 3600, (total % 3600) / 60)
        }
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= max && first_line.len() == text.trim_end().len() {
        return first_line.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = first_line.chars().take(keep).collect();
    out.push_str("...");
    out
}
