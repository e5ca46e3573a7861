//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use checkrun::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("Checking src");
//! ui.success("All checks passed");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Checking src"));
//! assert!(ui.has_success("passed"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::report::RunReport;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
    /// Finished as skipped.
    Skipped,
}

/// Mock UI implementation for testing.
///
/// Captures all UI interactions, including how each spinner finished.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    command_outputs: Vec<String>,
    error_blocks: Vec<(String, String, Option<String>)>,
    summaries: Vec<RunReport>,
    spinner_results: Rc<RefCell<Vec<(SpinnerStatus, String)>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get how each spinner finished, in finish order.
    pub fn spinner_results(&self) -> Vec<(SpinnerStatus, String)> {
        self.spinner_results.borrow().clone()
    }

    /// Get all tool output passed through.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_outputs
    }

    /// Get all captured error blocks as (command, output, hint).
    pub fn error_blocks(&self) -> &[(String, String, Option<String>)] {
        &self.error_blocks
    }

    /// Get all captured run summaries.
    pub fn summaries(&self) -> &[RunReport] {
        &self.summaries
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::recording(Rc::clone(&self.spinner_results)))
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn command_output(&mut self, output: &str) {
        self.command_outputs.push(output.to_string());
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        self.error_blocks.push((
            command.to_string(),
            output.to_string(),
            hint.map(|h| h.to_string()),
        ));
        if let Some(h) = hint {
            self.hints.push(h.to_string());
        }
    }

    fn show_run_summary(&mut self, report: &RunReport) {
        self.summaries.push(report.clone());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
    sink: Option<Rc<RefCell<Vec<(SpinnerStatus, String)>>>>,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    fn recording(sink: Rc<RefCell<Vec<(SpinnerStatus, String)>>>) -> Self {
        Self {
            sink: Some(sink),
            ..Default::default()
        }
    }

    /// Get all messages set during spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the final status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }

    fn finish(&mut self, status: SpinnerStatus, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(status);
        if let Some(sink) = &self.sink {
            sink.borrow_mut().push((status, msg.to_string()));
        }
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Error, msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Skipped, msg);
    }
}
