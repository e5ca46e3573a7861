//! Plain-text summary formatter.
//!
//! Used for non-TTY output; the terminal UI draws the same layout with
//! colors.

use super::{ReportFormatter, RunReport};
use crate::ui::{format_duration, StatusKind};
use std::io::Write;

/// Formats the end-of-run summary as plain text.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "  ┌─ Summary ──────────────────────────")?;

        for outcome in &report.outcomes {
            let kind = StatusKind::from(&outcome.status);
            let right_side = if outcome.status.was_run() {
                format_duration(outcome.duration)
            } else {
                outcome.status.describe()
            };
            writeln!(
                writer,
                "  │ {} {:<10} {:<28} {}",
                kind.icon(),
                outcome.kind.name(),
                outcome.program,
                right_side
            )?;
        }

        writeln!(writer, "  ├────────────────────────────────────")?;
        writeln!(
            writer,
            "  │ Total: {} · {} passed · {} failed · {} skipped",
            format_duration(report.duration),
            report.passed_count(),
            report.failed_count(),
            report.skipped_count()
        )?;
        writeln!(writer, "  └────────────────────────────────────")?;
        Ok(())
    }
}
