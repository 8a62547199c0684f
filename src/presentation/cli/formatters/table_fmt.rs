use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::ExecutableCommand;

use super::status_fmt::{colorize_health, colorize_metric, trend_glyph};
use crate::application::services::sampler::TickReport;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// Clear the terminal so the table redraws in place each tick.
///
/// Best-effort: a failure (no tty) just leaves the previous frame visible.
pub fn clear_screen() {
    let mut stdout = std::io::stdout();
    let _ = stdout
        .execute(Clear(ClearType::All))
        .and_then(|out| out.execute(MoveTo(0, 0)));
}

/// Formats one tick as the monitor table.
///
/// # Returns
///
/// A multi-line string with title, separator, one row per resource, and one
/// `Core N` row per core in per-core mode.
#[must_use]
pub fn format_sample_table(report: &TickReport, thresholds: &ThresholdSet) -> String {
    let snapshot = &report.snapshot;
    let trends = report.trends;

    let title = "pulse — System Health".bold().cyan().to_string();
    let separator = "─".repeat(32);

    let mut rows = vec![
        title,
        separator,
        format!(
            "{:<16} {} {}",
            "CPU (%)",
            colorize_metric(snapshot.cpu_pct, thresholds.cpu_pct),
            trend_glyph(trends.map(|t| t.cpu), false),
        ),
        format!(
            "{:<16} {} {}",
            "Memory (%)",
            colorize_metric(snapshot.mem_pct, thresholds.mem_pct),
            trend_glyph(trends.map(|t| t.mem), false),
        ),
        format!(
            "{:<16} {} {}",
            "Disk (%)",
            colorize_metric(snapshot.disk_pct, thresholds.disk_pct),
            trend_glyph(trends.map(|t| t.disk), false),
        ),
        format!(
            "{:<16} {} {}",
            "Health Score",
            colorize_health(report.health, thresholds),
            trend_glyph(trends.map(|t| t.health), true),
        ),
        format!("{:<16} {}", "Net Sent (KB)", snapshot.net_sent_kb),
        format!("{:<16} {}", "Net Recv (KB)", snapshot.net_recv_kb),
    ];

    if let Some(per_core) = &snapshot.per_core {
        for (i, usage) in per_core.iter().enumerate() {
            rows.push(format!(
                "{:<16} {}",
                format!("Core {i}"),
                colorize_metric(f64::from(*usage), thresholds.cpu_pct),
            ));
        }
    }

    rows.join("\n")
}
