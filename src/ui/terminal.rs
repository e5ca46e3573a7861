//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::report::RunReport;

use super::progress::format_duration;
use super::{
    CheckrunTheme, NonInteractiveUI, OutputMode, ProgressSpinner, SpinnerHandle, StatusKind,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: CheckrunTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: CheckrunTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(Term::stderr(), "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "    {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_status() && !output.is_empty() {
            writeln!(self.term, "{}", output.trim_end()).ok();
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        let b = &self.theme.border;
        let mut err = Term::stderr();

        writeln!(err).ok();
        writeln!(
            err,
            "    {} {}",
            b.apply_to("┌─"),
            b.apply_to("Command ──────────────────────────")
        )
        .ok();
        writeln!(
            err,
            "    {} {}",
            b.apply_to("│"),
            self.theme.command.apply_to(command)
        )
        .ok();
        if !output.is_empty() {
            writeln!(
                err,
                "    {} {}",
                b.apply_to("├─"),
                b.apply_to("Output ───────────────────────────")
            )
            .ok();
            for line in output.lines() {
                writeln!(err, "    {} {}", b.apply_to("│"), line).ok();
            }
        }
        writeln!(
            err,
            "    {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
        if let Some(h) = hint {
            writeln!(err, "    {}", self.theme.hint.apply_to(h)).ok();
        }
    }

    fn show_run_summary(&mut self, report: &RunReport) {
        if !self.mode.shows_status() {
            return;
        }

        let b = &self.theme.border;

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            b.apply_to("Summary ──────────────────────────")
        )
        .ok();

        for outcome in &report.outcomes {
            let icon = StatusKind::from(&outcome.status).styled(&self.theme);
            let right_side = if outcome.status.was_run() {
                self.theme
                    .duration
                    .apply_to(format_duration(outcome.duration))
                    .to_string()
            } else {
                self.theme.dim.apply_to(outcome.status.describe()).to_string()
            };

            writeln!(
                self.term,
                "  {} {} {:<10} {:<28} {}",
                b.apply_to("│"),
                icon,
                outcome.kind.name(),
                self.theme.command.apply_to(&outcome.program),
                right_side,
            )
            .ok();
        }

        writeln!(
            self.term,
            "  {}",
            b.apply_to("├────────────────────────────────────")
        )
        .ok();
        writeln!(
            self.term,
            "  {} Total: {} {} {} passed {} {} failed {} {} skipped",
            b.apply_to("│"),
            self.theme
                .duration
                .apply_to(format_duration(report.duration)),
            self.theme.dim.apply_to("·"),
            report.passed_count(),
            self.theme.dim.apply_to("·"),
            report.failed_count(),
            self.theme.dim.apply_to("·"),
            report.skipped_count(),
        )
        .ok();
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        ui.set_output_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false, OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}
