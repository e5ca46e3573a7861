//! Configuration schema definitions for checkrun.
//!
//! These structs map to the `.checkrun.yml` file format. Every field has a
//! default, so an empty file (or no file at all) yields the standard
//! four-check sequence over `src`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::checks::CheckKind;

/// Default directory checked when nothing else is configured.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Root configuration structure for `.checkrun.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CheckrunConfig {
    /// Path to lint/check, relative to the project root (default "src")
    pub source_dir: PathBuf,

    /// What to do when a check fails
    pub policy: FailurePolicy,

    /// Extra environment variables passed to every tool
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    /// Per-check overrides; omitted kinds keep their default tool
    pub checks: Vec<CheckConfig>,
}

impl Default for CheckrunConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            policy: FailurePolicy::default(),
            env: BTreeMap::new(),
            checks: CheckKind::ALL.into_iter().map(CheckConfig::new).collect(),
        }
    }
}

impl CheckrunConfig {
    /// Add a default entry for every check kind not configured.
    ///
    /// Configured entries override the defaults by kind. A check is only
    /// turned off with `enabled: false`, never by leaving it out.
    pub fn fill_default_checks(&mut self) {
        for kind in CheckKind::ALL {
            if !self.checks.iter().any(|c| c.kind == kind) {
                self.checks.push(CheckConfig::new(kind));
            }
        }
        self.checks.sort_by_key(|c| c.kind);
    }

    /// The entry configuring `kind`, if any.
    pub fn check(&self, kind: CheckKind) -> Option<&CheckConfig> {
        self.checks.iter().find(|c| c.kind == kind)
    }
}

/// Per-check configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Which check this entry configures
    pub kind: CheckKind,

    /// Program to run instead of the default tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Arguments placed before the source directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Set to false to keep the entry but skip the check
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub enabled: bool,
}

impl CheckConfig {
    /// An entry that uses the kind's default tool.
    pub fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            command: None,
            args: None,
            enabled: true,
        }
    }
}

/// How a run reacts to a failing check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Run every check and fail if any failed.
    #[default]
    CollectAll,
    /// Stop at the first failing check.
    FailFast,
}

impl FailurePolicy {
    /// Config name.
    pub fn name(self) -> &'static str {
        match self {
            Self::CollectAll => "collect_all",
            Self::FailFast => "fail_fast",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "collect_all" => Ok(Self::CollectAll),
            "fail_fast" => Ok(Self::FailFast),
            _ => Err(format!("unknown failure policy: {}", s)),
        }
    }
}

fn default_true() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}
