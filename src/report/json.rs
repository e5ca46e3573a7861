//! JSON output formatter.
//!
//! Formats a run report as machine-readable JSON for tooling integration.

use super::{ReportFormatter, RunReport};
use serde::Serialize;
use std::io::Write;

/// Formats a run report as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    source_dir: String,
    policy: &'a str,
    started_at: String,
    duration_ms: u128,
    success: bool,
    exit_code: i32,
    checks: Vec<JsonCheck<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    kind: &'a str,
    command: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    duration_ms: u128,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    failed: usize,
    skipped: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()> {
        let checks = report
            .outcomes
            .iter()
            .map(|o| JsonCheck {
                kind: o.kind.name(),
                command: &o.command,
                status: o.status.as_str(),
                exit_code: o.status.exit_code(),
                detail: (!o.status.was_run()).then(|| o.status.describe()),
                duration_ms: o.duration.as_millis(),
            })
            .collect();

        let output = JsonReport {
            source_dir: report.source_dir.display().to_string(),
            policy: report.policy.name(),
            started_at: report.started_at.to_rfc3339(),
            duration_ms: report.duration.as_millis(),
            success: report.success(),
            exit_code: report.exit_code(),
            checks,
            summary: JsonSummary {
                total: report.outcomes.len(),
                passed: report.passed_count(),
                failed: report.failed_count(),
                skipped: report.skipped_count(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckKind, CheckStatus, SkipReason};
    use crate::report::test_support::report;

    fn render(report: &RunReport) -> serde_json::Value {
        let output = JsonFormatter::new().format_to_string(report);
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn includes_every_check_in_order() {
        let report = report(vec![
            (CheckKind::Style, CheckStatus::Passed),
            (CheckKind::Imports, CheckStatus::Passed),
            (CheckKind::Lint, CheckStatus::Failed { exit_code: Some(16) }),
            (CheckKind::Typecheck, CheckStatus::Passed),
        ]);

        let json = render(&report);
        let checks = json["checks"].as_array().unwrap();
        let kinds: Vec<_> = checks.iter().map(|c| c["kind"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["style", "imports", "lint", "typecheck"]);
        assert_eq!(checks[2]["status"], "failed");
        assert_eq!(checks[2]["exit_code"], 16);
        assert_eq!(checks[0]["command"], "black --check src");
    }

    #[test]
    fn reports_overall_result() {
        let report = report(vec![(
            CheckKind::Typecheck,
            CheckStatus::Failed { exit_code: Some(1) },
        )]);

        let json = render(&report);
        assert_eq!(json["success"], false);
        assert_eq!(json["exit_code"], 1);
        assert_eq!(json["policy"], "collect_all");
        assert_eq!(json["source_dir"], "src");
        assert_eq!(json["summary"]["failed"], 1);
    }

    #[test]
    fn skipped_checks_carry_a_reason() {
        let report = report(vec![(
            CheckKind::Lint,
            CheckStatus::Skipped(SkipReason::Halted),
        )]);

        let json = render(&report);
        assert_eq!(json["checks"][0]["status"], "skipped");
        assert!(json["checks"][0]["exit_code"].is_null());
        assert_eq!(
            json["checks"][0]["detail"],
            "skipped (halted after earlier failure)"
        );
    }
}
