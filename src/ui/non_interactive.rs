//! Non-interactive UI for CI/headless environments.

use crate::report::{HumanFormatter, ReportFormatter, RunReport};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Spinners become one plain line per finished check, so logs read
/// top-to-bottom in CI.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(LineSpinner {
            visible: self.mode.shows_spinners(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("    Hint: {}", hint);
        }
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_status() && !output.is_empty() {
            println!("{}", output.trim_end());
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        eprintln!();
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        if !output.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
        if let Some(h) = hint {
            eprintln!("    Hint: {}", h);
        }
    }

    fn show_run_summary(&mut self, report: &RunReport) {
        if !self.mode.shows_status() {
            return;
        }
        println!();
        print!("{}", HumanFormatter::new().format_to_string(report));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints only the final line.
struct LineSpinner {
    visible: bool,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.visible {
            println!("  ✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.visible {
            println!("  ✗ {}", msg);
        }
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.visible {
            println!("  ○ {}", msg);
        }
    }
}
