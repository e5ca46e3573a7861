//! Run reports and their renderings.
//!
//! A [`RunReport`] is the accumulated result of one run: every check's
//! outcome, in execution order. The overall result is the logical AND of
//! all outcomes, so a failure in any position (including the last check)
//! fails the run.

pub mod human;
pub mod json;

use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::checks::CheckOutcome;
use crate::config::FailurePolicy;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Exit code when every executed check passed.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one check failed or could not run.
pub const EXIT_CHECK_FAILED: i32 = 1;
/// Exit code for configuration and usage errors.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Output format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Status lines and a summary box.
    #[default]
    Human,
    /// A single JSON document on stdout.
    Json,
}

/// Trait for formatting a run report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()>;

    /// Format the report into a string.
    fn format_to_string(&self, report: &RunReport) -> String {
        let mut output = Vec::new();
        if self.format(report, &mut output).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&output).into_owned()
    }
}

/// The result of one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Directory that was checked, as configured.
    pub source_dir: PathBuf,
    /// Policy the run used.
    pub policy: FailurePolicy,
    /// Wall-clock start of the run.
    pub started_at: DateTime<Utc>,
    /// Total run time.
    pub duration: Duration,
    /// One outcome per configured check, in execution order.
    pub outcomes: Vec<CheckOutcome>,
}

impl RunReport {
    /// Start an empty report.
    pub fn new(source_dir: PathBuf, policy: FailurePolicy) -> Self {
        Self {
            source_dir,
            policy,
            started_at: Utc::now(),
            duration: Duration::ZERO,
            outcomes: Vec::new(),
        }
    }

    /// Whether every check that was due to run passed.
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(|o| !o.status.is_failure())
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            EXIT_SUCCESS
        } else {
            EXIT_CHECK_FAILED
        }
    }

    /// Outcomes that make the run fail.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_failure())
    }

    /// Number of checks that passed.
    pub fn passed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, crate::checks::CheckStatus::Passed))
            .count()
    }

    /// Number of checks that failed or could not run.
    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Number of checks that were not invoked.
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, crate::checks::CheckStatus::Skipped(_)))
            .count()
    }

    /// One-line result, e.g. "2 of 4 checks failed: lint, typecheck".
    pub fn headline(&self) -> String {
        let due = self.outcomes.len() - self.skipped_count();
        if self.success() {
            let label = if due == 1 { "check" } else { "checks" };
            format!("All {} {} passed", due, label)
        } else {
            let names: Vec<&str> = self.failures().map(|o| o.kind.name()).collect();
            format!(
                "{} of {} checks failed: {}",
                names.len(),
                due,
                names.join(", ")
            )
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::checks::{Check, CheckKind, CheckStatus, SkipReason};
    use std::path::Path;

    pub fn outcome(kind: CheckKind, status: CheckStatus) -> CheckOutcome {
        let check = Check::default_for(kind);
        let mut outcome = CheckOutcome::skipped(&check, Path::new("src"), SkipReason::Filtered);
        outcome.status = status;
        if outcome.status.was_run() {
            outcome.duration = Duration::from_millis(250);
        }
        outcome
    }

    pub fn report(statuses: Vec<(CheckKind, CheckStatus)>) -> RunReport {
        let mut report = RunReport::new(PathBuf::from("src"), FailurePolicy::CollectAll);
        report.outcomes = statuses
            .into_iter()
            .map(|(kind, status)| outcome(kind, status))
            .collect();
        report
    }
}
