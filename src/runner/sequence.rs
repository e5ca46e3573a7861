//! The check sequencer.
//!
//! Every configured check runs at most once, in canonical order
//! (style, imports, lint, typecheck). Each outcome is accumulated into a
//! [`RunReport`]; the run's result is the AND of all of them.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::checks::{Check, CheckKind, CheckOutcome, CheckStatus, SkipReason};
use crate::config::{CheckrunConfig, FailurePolicy};
use crate::error::{CheckrunError, Result};
use crate::report::RunReport;
use crate::ui::{format_duration, UserInterface};

use super::executor::CheckExecutor;

/// Which configured checks to run.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Run only these kinds (empty means all).
    pub only: Vec<CheckKind>,
    /// Never run these kinds.
    pub skip: Vec<CheckKind>,
}

impl Selection {
    /// Parse `--only` / `--skip` names.
    pub fn parse(only: &[String], skip: &[String]) -> Result<Self> {
        Ok(Self {
            only: parse_kinds(only)?,
            skip: parse_kinds(skip)?,
        })
    }

    /// Whether `kind` is selected.
    pub fn includes(&self, kind: CheckKind) -> bool {
        (self.only.is_empty() || self.only.contains(&kind)) && !self.skip.contains(&kind)
    }
}

fn parse_kinds(names: &[String]) -> Result<Vec<CheckKind>> {
    names
        .iter()
        .filter(|n| !n.trim().is_empty())
        .map(|n| {
            n.parse::<CheckKind>()
                .map_err(|_| CheckrunError::UnknownCheck { name: n.clone() })
        })
        .collect()
}

/// Runs the configured checks against the source tree.
#[derive(Debug, Clone)]
pub struct CheckRunner {
    project_root: PathBuf,
    source_dir: PathBuf,
    policy: FailurePolicy,
    checks: Vec<Check>,
    selection: Selection,
}

impl CheckRunner {
    /// Create a runner for a resolved configuration.
    ///
    /// Every kind gets exactly one check: the configured entry when there
    /// is one, the default tool otherwise.
    pub fn new(project_root: &Path, config: &CheckrunConfig) -> Self {
        let checks = CheckKind::ALL
            .into_iter()
            .map(|kind| {
                config
                    .check(kind)
                    .map(Check::from_config)
                    .unwrap_or_else(|| Check::default_for(kind))
            })
            .collect();

        Self {
            project_root: project_root.to_path_buf(),
            source_dir: config.source_dir.clone(),
            policy: config.policy,
            checks,
            selection: Selection::default(),
        }
    }

    /// Restrict which checks run.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Checks in execution order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// The failure policy in effect.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// The configured source directory.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Run every check and return the accumulated report.
    ///
    /// # Errors
    ///
    /// Returns `SourceDirNotFound` before any tool starts if the source
    /// directory does not exist. Tool failures are never errors; they are
    /// recorded in the report.
    pub fn run(
        &self,
        executor: &mut dyn CheckExecutor,
        ui: &mut dyn UserInterface,
    ) -> Result<RunReport> {
        let resolved = self.project_root.join(&self.source_dir);
        if !resolved.is_dir() {
            return Err(CheckrunError::SourceDirNotFound { path: resolved });
        }

        tracing::info!(
            "Checking {} with {} check(s), policy {}",
            self.source_dir.display(),
            self.checks.len(),
            self.policy
        );

        let start = Instant::now();
        let mut report = RunReport::new(self.source_dir.clone(), self.policy);
        let mut halted = false;

        for check in &self.checks {
            let skip_reason = if !check.enabled {
                Some(SkipReason::Disabled)
            } else if !self.selection.includes(check.kind) {
                Some(SkipReason::Filtered)
            } else if halted {
                Some(SkipReason::Halted)
            } else {
                None
            };

            let outcome = match skip_reason {
                Some(reason) => {
                    tracing::debug!("Skipping {}: {}", check.kind, reason.describe());
                    let outcome = CheckOutcome::skipped(check, &self.source_dir, reason);
                    if reason != SkipReason::Filtered {
                        let mut spinner = ui.start_spinner(&label(check));
                        spinner.finish_skipped(&format!(
                            "{} {}",
                            label(check),
                            outcome.status.describe()
                        ));
                    }
                    outcome
                }
                None => self.run_one(check, executor, ui)?,
            };

            if outcome.status.is_failure() && self.policy == FailurePolicy::FailFast {
                tracing::info!("{} failed, halting remaining checks", check.kind);
                halted = true;
            }

            report.outcomes.push(outcome);
        }

        report.duration = start.elapsed();
        tracing::info!(
            "Run finished in {}: {}",
            format_duration(report.duration),
            report.headline()
        );
        Ok(report)
    }

    fn run_one(
        &self,
        check: &Check,
        executor: &mut dyn CheckExecutor,
        ui: &mut dyn UserInterface,
    ) -> Result<CheckOutcome> {
        let command = check.command_line(&self.source_dir);
        tracing::debug!("Running {}: {}", check.kind, command);

        let mut spinner = ui.start_spinner(&label(check));
        let started = Instant::now();

        let mut outcome = CheckOutcome {
            kind: check.kind,
            program: check.program.clone(),
            command: command.clone(),
            status: CheckStatus::Passed,
            duration: Duration::ZERO,
            stdout: String::new(),
            stderr: String::new(),
        };

        match executor.run(check, &self.source_dir) {
            Ok(result) => {
                outcome.duration = result.duration;
                outcome.stdout = result.stdout;
                outcome.stderr = result.stderr;
                if !result.success {
                    outcome.status = CheckStatus::Failed {
                        exit_code: result.exit_code,
                    };
                }
            }
            Err(CheckrunError::ToolNotFound { program }) => {
                tracing::warn!("{} not found on PATH", program);
                outcome.duration = started.elapsed();
                outcome.status = CheckStatus::Missing;
            }
            Err(CheckrunError::SpawnFailed { message, .. }) => {
                tracing::warn!("Could not start {}: {}", check.program, message);
                outcome.duration = started.elapsed();
                outcome.status = CheckStatus::Errored { message };
            }
            Err(e) => return Err(e),
        }

        let mode = ui.output_mode();
        match &outcome.status {
            CheckStatus::Passed => {
                spinner.finish_success(&format!(
                    "{} {}",
                    label(check),
                    format_duration(outcome.duration)
                ));
                if mode.shows_command_output() {
                    ui.command_output(&outcome.output());
                }
            }
            CheckStatus::Missing => {
                spinner.finish_error(&format!("{} {}", label(check), outcome.status.describe()));
                if mode.shows_failure_output() {
                    ui.show_error_block(
                        &command,
                        "",
                        Some(&format!(
                            "Install '{}' or make sure it is on PATH",
                            check.program
                        )),
                    );
                }
            }
            status => {
                tracing::info!("{} {}", check.kind, status.describe());
                spinner.finish_error(&format!("{} {}", label(check), status.describe()));
                if mode.shows_failure_output() {
                    ui.show_error_block(&command, &outcome.output(), None);
                }
            }
        }

        Ok(outcome)
    }
}

fn label(check: &Check) -> String {
    format!("{} ({})", check.kind, check.program)
}
