//! Quality checks: what to run and what happened.
//!
//! - [`CheckKind`] names the four checks and their default tools
//! - [`Check`] is a check resolved from configuration, ready to run
//! - [`CheckOutcome`] records the result of one check in a run

pub mod kind;

pub use kind::CheckKind;

use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

use crate::config::CheckConfig;
use crate::shell::command_line;

/// A check resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Which check this is.
    pub kind: CheckKind,
    /// Program looked up on PATH.
    pub program: String,
    /// Arguments placed before the source directory.
    pub args: Vec<String>,
    /// Disabled checks are reported as skipped.
    pub enabled: bool,
}

impl Check {
    /// The default check for a kind.
    pub fn default_for(kind: CheckKind) -> Self {
        Self {
            kind,
            program: kind.default_program().to_string(),
            args: kind.default_args().iter().map(|s| s.to_string()).collect(),
            enabled: true,
        }
    }

    /// Resolve a configured check, filling in defaults.
    pub fn from_config(config: &CheckConfig) -> Self {
        let default = Self::default_for(config.kind);
        Self {
            kind: config.kind,
            program: config.command.clone().unwrap_or(default.program),
            args: config.args.clone().unwrap_or(default.args),
            enabled: config.enabled,
        }
    }

    /// Full argument vector: configured args followed by the source directory.
    pub fn argv(&self, source_dir: &Path) -> Vec<OsString> {
        let mut argv: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        argv.push(source_dir.as_os_str().to_os_string());
        argv
    }

    /// Display form of the invocation.
    pub fn command_line(&self, source_dir: &Path) -> String {
        command_line(&self.program, &self.argv(source_dir))
    }
}

/// Why a check did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `enabled: false` in config.
    Disabled,
    /// Excluded by `--only` / `--skip`.
    Filtered,
    /// An earlier check failed under the fail-fast policy.
    Halted,
}

impl SkipReason {
    /// Short human description.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Filtered => "not selected",
            Self::Halted => "halted after earlier failure",
        }
    }
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Tool exited 0.
    Passed,
    /// Tool exited non-zero (`None` when killed by a signal).
    Failed { exit_code: Option<i32> },
    /// Tool is not on PATH.
    Missing,
    /// Tool could not be started for another reason.
    Errored { message: String },
    /// Tool was not invoked.
    Skipped(SkipReason),
}

impl CheckStatus {
    /// Stable identifier used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed { .. } => "failed",
            Self::Missing => "missing",
            Self::Errored { .. } => "errored",
            Self::Skipped(_) => "skipped",
        }
    }

    /// Whether this status makes the run fail.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::Failed { .. } | Self::Missing | Self::Errored { .. }
        )
    }

    /// Whether the tool was actually invoked.
    pub fn was_run(&self) -> bool {
        matches!(self, Self::Passed | Self::Failed { .. })
    }

    /// Exit code of the tool, if it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Passed => Some(0),
            Self::Failed { exit_code } => *exit_code,
            _ => None,
        }
    }

    /// Short human description, e.g. "exited with code 16".
    pub fn describe(&self) -> String {
        match self {
            Self::Passed => "passed".to_string(),
            Self::Failed {
                exit_code: Some(code),
            } => format!("exited with code {}", code),
            Self::Failed { exit_code: None } => "terminated by signal".to_string(),
            Self::Missing => "tool not found on PATH".to_string(),
            Self::Errored { message } => message.clone(),
            Self::Skipped(reason) => format!("skipped ({})", reason.describe()),
        }
    }
}

/// What happened to one check during a run.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Which check.
    pub kind: CheckKind,
    /// Program that was (or would have been) invoked.
    pub program: String,
    /// Full invocation as displayed.
    pub command: String,
    /// Result.
    pub status: CheckStatus,
    /// Wall time spent in the tool (zero when not run).
    pub duration: Duration,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CheckOutcome {
    /// An outcome for a check that was not invoked.
    pub fn skipped(check: &Check, source_dir: &Path, reason: SkipReason) -> Self {
        Self {
            kind: check.kind,
            program: check.program.clone(),
            command: check.command_line(source_dir),
            status: CheckStatus::Skipped(reason),
            duration: Duration::ZERO,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Combined tool output, stdout first.
    pub fn output(&self) -> String {
        match (self.stdout.trim_end(), self.stderr.trim_end()) {
            ("", err) => err.to_string(),
            (out, "") => out.to_string(),
            (out, err) => format!("{}\n{}", out, err),
        }
    }
}
